use crate::assets::palette::Palette;
use crate::render::canvas::Canvas;

/// Draw a bow tie centered on `(x, y)`.
///
/// The right bow starts at the knot's center column, so it paints over the right half of
/// the knot.
pub fn draw_bow_tie(canvas: &mut Canvas, palette: &Palette, x: i32, y: i32, size: i32) {
    let sixth = size / 6;
    let third = size / 3;
    let half = size / 2;
    let quarter = size / 4;

    canvas.fill_rect(x - sixth, y - sixth, third, third, palette.red_dark);

    let in_bow = |i: i32, j: i32| {
        let dx = i - quarter;
        let dy = j - sixth;
        dx * dx + dy * dy <= third * third
    };

    for i in 0..half {
        for j in 0..third {
            if !in_bow(i, j) {
                continue;
            }
            let color = if i < sixth {
                palette.red_dark
            } else {
                palette.red
            };
            canvas.set_pixel(x - half - i, y - sixth + j, color);
        }
    }

    for i in 0..half {
        for j in 0..third {
            if !in_bow(i, j) {
                continue;
            }
            let color = if i > third {
                palette.red_light
            } else {
                palette.red
            };
            canvas.set_pixel(x + i, y - sixth + j, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/bow_tie.rs"]
mod tests;
