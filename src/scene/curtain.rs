//! Theater curtain backdrop, shaded per pixel from a sum of sine "folds".

use crate::animation::Keyframe;
use crate::assets::palette::Palette;
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::math::trunc_i32;
use crate::render::canvas::Canvas;

pub const CURTAIN_SIZE: Size = Size::new(256, 512);
pub const ROD_HEIGHT: i32 = 15;
/// Anchors of the three rope ties, top-left of each rope.
pub const TIE_POSITIONS: [(i32, i32); 3] = [(30, 100), (40, 250), (50, 400)];

const ROPE_SIZE: (i32, i32) = (20, 30);
const TASSEL_SIZE: (i32, i32) = (16, 15);

/// Shading band picked for one curtain pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldBand {
    DeepShadow,
    MediumShadow,
    Highlight,
    Base,
}

impl FoldBand {
    pub fn classify(fold: f64) -> Self {
        if fold > 10.0 {
            FoldBand::DeepShadow
        } else if fold > 5.0 {
            FoldBand::MediumShadow
        } else if fold < -5.0 {
            FoldBand::Highlight
        } else {
            FoldBand::Base
        }
    }
}

/// Sum of the large vertical folds and the smaller diagonal ripples at `(x, y)`.
pub fn fold_pattern(x: i32, y: i32) -> f64 {
    let (x, y) = (f64::from(x), f64::from(y));
    let major = 15.0 * (y / 60.0).sin() + 8.0 * (y / 30.0 + 2.0).sin();
    let minor = 5.0 * (y / 15.0 + x / 40.0).sin() + 3.0 * (y / 8.0).sin();
    major + minor
}

/// 0 at the center column, 0.7 at the edges.
fn edge_shadow(x: i32, width: i32) -> f64 {
    let half = f64::from(width) / 2.0;
    (f64::from(x) - half).abs() / half * 0.7
}

pub fn cloth_color(palette: &Palette, x: i32, y: i32, width: i32) -> Rgba8 {
    let shadow = edge_shadow(x, width);
    let darken = |amount: f64| {
        let d = trunc_i32(amount * shadow);
        move |c: u8| (i32::from(c) - d).max(0) as u8
    };
    match FoldBand::classify(fold_pattern(x, y)) {
        FoldBand::DeepShadow => palette.curtain_dark,
        FoldBand::MediumShadow => palette.curtain_red.map_rgb(darken(50.0)),
        FoldBand::Highlight => {
            let lift = trunc_i32(30.0 * (1.0 - shadow));
            palette
                .curtain_highlight
                .map_rgb(|c| (i32::from(c) + lift).min(255) as u8)
        }
        FoldBand::Base => palette.curtain_red.map_rgb(darken(30.0)),
    }
}

fn rod_color(palette: &Palette, x: i32, y: i32) -> Rgba8 {
    if x % 30 < 5 && y < ROD_HEIGHT / 2 {
        return palette.lighter_gray;
    }
    if y < ROD_HEIGHT / 3 {
        palette.light_gray
    } else if y < 2 * ROD_HEIGHT / 3 {
        palette.gray
    } else {
        palette.dark_gray
    }
}

fn draw_tie(canvas: &mut Canvas, palette: &Palette, pos_x: i32, pos_y: i32) {
    let (rope_w, rope_h) = ROPE_SIZE;
    for y in 0..rope_h {
        let curve = 5.0 * (f64::from(y) / 5.0).sin();
        for x in 0..rope_w {
            let dist = (f64::from(x) - f64::from(rope_w) / 2.0 - curve).abs();
            if dist < 4.0 {
                let color = if dist < 2.0 {
                    palette.gold
                } else {
                    palette.yellow_dark
                };
                canvas.set_pixel(pos_x + x, pos_y + y, color);
            }
        }
    }

    let (tassel_w, tassel_h) = TASSEL_SIZE;
    let tassel_x = pos_x + rope_w / 2 - tassel_w / 2;
    for y in 0..tassel_h {
        for x in 0..tassel_w {
            if (x + y) % 4 < 2 {
                canvas.set_pixel(tassel_x + x, pos_y + rope_h + y, palette.gold);
            }
        }
    }
}

/// The full curtain: folded cloth, rod across the top, rope ties down the left side.
pub fn draw_curtain(palette: &Palette) -> Canvas {
    let mut canvas = Canvas::blank(CURTAIN_SIZE);
    let (w, h) = (CURTAIN_SIZE.width as i32, CURTAIN_SIZE.height as i32);

    for y in 0..h {
        for x in 0..w {
            canvas.set_pixel(x, y, cloth_color(palette, x, y, w));
        }
    }

    for y in 0..ROD_HEIGHT {
        for x in 0..w {
            canvas.set_pixel(x, y, rod_color(palette, x, y));
        }
    }

    for (x, y) in TIE_POSITIONS {
        draw_tie(&mut canvas, palette, x, y);
    }

    canvas
}

/// The three curtain files: the left panel as drawn, the right panel mirrored, and the
/// unmirrored curtain again as the standalone backdrop.
#[tracing::instrument(skip(palette))]
pub fn curtain_images(palette: &Palette) -> Vec<Keyframe> {
    let base = draw_curtain(palette);
    let mirrored = base.mirrored_horizontal();
    vec![
        Keyframe {
            name: "curtain_left.png".to_owned(),
            canvas: base.clone(),
        },
        Keyframe {
            name: "curtain_right.png".to_owned(),
            canvas: mirrored,
        },
        Keyframe {
            name: "curtain.png".to_owned(),
            canvas: base,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/curtain.rs"]
mod tests;
