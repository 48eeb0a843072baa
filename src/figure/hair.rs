use crate::assets::palette::Palette;
use crate::figure::face::{FACE_HEIGHT, FACE_WIDTH};
use crate::figure::pose::{Facing, HairStyle};
use crate::render::canvas::Canvas;

/// Whether face-local column `ix` carries hair; the middle third of the scalp is bald.
fn has_fringe(ix: i32) -> bool {
    ix < FACE_WIDTH / 3 - 3 || ix > 2 * FACE_WIDTH / 3 + 3
}

/// Draw hair around a face whose bounding box starts at `(x, y)`.
pub fn draw_hair(
    canvas: &mut Canvas,
    palette: &Palette,
    x: i32,
    y: i32,
    style: HairStyle,
    facing: Facing,
) {
    match style {
        HairStyle::Comedian => draw_comedian_hair(canvas, palette, x, y, facing),
    }
}

fn draw_comedian_hair(canvas: &mut Canvas, palette: &Palette, x: i32, y: i32, facing: Facing) {
    let off = facing.head_offset();
    let mid = FACE_WIDTH / 2;

    // Fringe thins out away from the center.
    for ix in -3..FACE_WIDTH + 3 {
        if !has_fringe(ix) {
            continue;
        }
        let height = 4 - (ix - mid).abs() / 6;
        let color = if ix > mid {
            palette.brown
        } else {
            palette.brown_dark
        };
        for iy in 0..height {
            canvas.set_pixel(x + ix + off, y - iy - 1, color);
        }
    }

    for iy in 0..FACE_HEIGHT / 2 {
        let upper = iy < FACE_HEIGHT / 4;
        match facing {
            Facing::Front => {
                let side_w = if upper { 4 } else { 3 };
                for ix in 0..side_w {
                    canvas.set_pixel(x - ix - 1, y + iy, palette.brown_dark);
                    canvas.set_pixel(x + FACE_WIDTH + ix, y + iy, palette.brown);
                }
            }
            Facing::Left => {
                let side_w = if upper { 5 } else { 4 };
                for ix in 0..side_w {
                    canvas.set_pixel(x + FACE_WIDTH + ix + off, y + iy, palette.brown);
                }
            }
            Facing::Right => {
                let side_w = if upper { 5 } else { 4 };
                for ix in 0..side_w {
                    canvas.set_pixel(x - ix - 1 + off, y + iy, palette.brown_dark);
                }
            }
        }
    }

    for i in (0..FACE_WIDTH).step_by(6) {
        if has_fringe(i) {
            canvas.draw_line(
                x + i + off,
                y - 1,
                x + i + 1 + off,
                y - 3,
                palette.brown_dark,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/hair.rs"]
mod tests;
