use crate::assets::palette::Palette;
use crate::figure::pose::{Expression, Facing};
use crate::render::canvas::Canvas;

pub const FACE_WIDTH: i32 = 24;
pub const FACE_HEIGHT: i32 = 26;

/// Normalized ellipse distance of face-local pixel `(ix, iy)`; `<= 1.0` is inside the face.
pub fn face_ellipse_ratio(ix: i32, iy: i32) -> f64 {
    let half_w = FACE_WIDTH / 2;
    let half_h = FACE_HEIGHT / 2;
    let dx = f64::from(ix - half_w);
    let dy = f64::from(iy - half_h);
    dx * dx / f64::from(half_w * half_w) + dy * dy / f64::from(half_h * half_h)
}

/// Draw the oval face with `(x, y)` as the top-left of its bounding box (before the facing
/// offset is applied).
pub fn draw_face(
    canvas: &mut Canvas,
    palette: &Palette,
    x: i32,
    y: i32,
    expression: Expression,
    facing: Facing,
) {
    let off = facing.head_offset();

    for iy in 0..FACE_HEIGHT {
        for ix in 0..FACE_WIDTH {
            if face_ellipse_ratio(ix, iy) > 1.0 {
                continue;
            }
            let skin = match facing {
                Facing::Front if ix < FACE_WIDTH / 3 => palette.skin_shadow,
                Facing::Front if ix > 2 * FACE_WIDTH / 3 => palette.skin_highlight,
                Facing::Left if ix < FACE_WIDTH / 2 => palette.skin_shadow,
                Facing::Right if ix > FACE_WIDTH / 2 => palette.skin_highlight,
                _ => palette.skin,
            };
            canvas.set_pixel(x + ix + off, y + iy, skin);
        }
    }

    for iy in 0..FACE_HEIGHT {
        for ix in 0..FACE_WIDTH {
            let ratio = face_ellipse_ratio(ix, iy);
            if ratio > 0.9 && ratio <= 1.0 {
                canvas.set_pixel(x + ix + off, y + iy, palette.dark_outline);
            }
        }
    }

    let eye_y = y + FACE_HEIGHT / 3;
    match facing {
        Facing::Front => draw_front_eyes(canvas, palette, x, eye_y, expression),
        Facing::Left => {
            let eye_x = x + 2 * FACE_WIDTH / 3 + off;
            draw_profile_eye(canvas, palette, eye_x, eye_y, expression, facing);
        }
        Facing::Right => {
            let eye_x = x + FACE_WIDTH / 3 + off;
            draw_profile_eye(canvas, palette, eye_x, eye_y, expression, facing);
        }
    }

    let mouth_x = x + FACE_WIDTH / 2 - 5 + off;
    let mouth_y = y + 3 * FACE_HEIGHT / 4;
    draw_mouth(canvas, palette, mouth_x, mouth_y, expression);

    if expression == Expression::Laughing && facing == Facing::Front {
        // Crinkles above the closed eyes.
        canvas.draw_line(
            x + FACE_WIDTH / 4,
            eye_y - 5,
            x + FACE_WIDTH / 3 - 2,
            eye_y - 2,
            palette.dark_outline,
        );
        canvas.draw_line(
            x + 3 * FACE_WIDTH / 4,
            eye_y - 5,
            x + 2 * FACE_WIDTH / 3 + 2,
            eye_y - 2,
            palette.dark_outline,
        );
    }
}

fn draw_open_eye(canvas: &mut Canvas, palette: &Palette, eye_x: i32, eye_y: i32) {
    canvas.fill_rect(eye_x - 2, eye_y, 4, 4, palette.white);
    canvas.fill_rect(eye_x, eye_y + 1, 2, 2, palette.black);
}

fn draw_raised_eye(canvas: &mut Canvas, palette: &Palette, eye_x: i32, eye_y: i32) {
    canvas.fill_rect(eye_x - 2, eye_y - 1, 4, 3, palette.white);
    canvas.fill_rect(eye_x, eye_y, 2, 2, palette.black);
}

fn draw_front_eyes(
    canvas: &mut Canvas,
    palette: &Palette,
    x: i32,
    eye_y: i32,
    expression: Expression,
) {
    let left_x = x + FACE_WIDTH / 3;
    let right_x = x + 2 * FACE_WIDTH / 3;

    match expression {
        Expression::Neutral | Expression::Talking => {
            draw_open_eye(canvas, palette, left_x, eye_y);
            draw_open_eye(canvas, palette, right_x, eye_y);
        }
        Expression::Laughing => {
            canvas.draw_line(
                left_x - 3,
                eye_y,
                left_x + 2,
                eye_y - 1,
                palette.dark_outline,
            );
            canvas.draw_line(
                right_x - 2,
                eye_y - 1,
                right_x + 3,
                eye_y,
                palette.dark_outline,
            );
        }
        Expression::Thinking => {
            canvas.fill_rect(left_x - 2, eye_y, 4, 1, palette.dark_outline);
            draw_raised_eye(canvas, palette, right_x, eye_y);
            canvas.draw_line(
                left_x - 3,
                eye_y - 3,
                left_x + 2,
                eye_y - 4,
                palette.dark_outline,
            );
        }
    }
}

fn draw_profile_eye(
    canvas: &mut Canvas,
    palette: &Palette,
    eye_x: i32,
    eye_y: i32,
    expression: Expression,
    facing: Facing,
) {
    match expression {
        Expression::Neutral | Expression::Talking => draw_open_eye(canvas, palette, eye_x, eye_y),
        Expression::Laughing => {
            // The closed-eye arc tilts toward the direction the head is turned.
            let (x1, y1, x2, y2) = match facing {
                Facing::Right => (eye_x - 3, eye_y, eye_x + 2, eye_y - 1),
                Facing::Left | Facing::Front => (eye_x - 2, eye_y - 1, eye_x + 3, eye_y),
            };
            canvas.draw_line(x1, y1, x2, y2, palette.dark_outline);
        }
        Expression::Thinking => draw_raised_eye(canvas, palette, eye_x, eye_y),
    }
}

fn draw_mouth(
    canvas: &mut Canvas,
    palette: &Palette,
    mouth_x: i32,
    mouth_y: i32,
    expression: Expression,
) {
    match expression {
        Expression::Neutral => {
            canvas.draw_line(
                mouth_x,
                mouth_y,
                mouth_x + 10,
                mouth_y,
                palette.dark_outline,
            );
        }
        Expression::Talking => {
            canvas.fill_rect(mouth_x, mouth_y - 2, 10, 5, palette.dark_outline);
            canvas.fill_rect(mouth_x + 1, mouth_y - 1, 8, 3, palette.red_dark);
            for i in (1..8).step_by(2) {
                canvas.fill_rect(mouth_x + i, mouth_y - 1, 1, 1, palette.white);
            }
        }
        Expression::Laughing => {
            canvas.fill_rect(mouth_x - 1, mouth_y - 4, 12, 7, palette.dark_outline);
            canvas.fill_rect(mouth_x, mouth_y - 3, 10, 5, palette.red_dark);
            for i in (1..9).step_by(2) {
                canvas.fill_rect(mouth_x + i, mouth_y - 3, 1, 2, palette.white);
            }
        }
        Expression::Thinking => {
            canvas.draw_line(
                mouth_x + 2,
                mouth_y,
                mouth_x + 8,
                mouth_y,
                palette.dark_outline,
            );
            canvas.draw_line(
                mouth_x + 2,
                mouth_y + 1,
                mouth_x + 5,
                mouth_y + 2,
                palette.dark_outline,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/face.rs"]
mod tests;
