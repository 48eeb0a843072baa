//! Primitive rasterizer: every operation funnels through [`Canvas::set_pixel`], so anything
//! drawn partially off-canvas is clipped instead of failing.

use crate::foundation::core::Rgba8;
use crate::foundation::math::{Rng64, trunc_i32};
use crate::render::canvas::Canvas;

impl Canvas {
    /// Fill the half-open box `[x, x + w) x [y, y + h)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba8) {
        for iy in 0..h.max(0) {
            for ix in 0..w.max(0) {
                self.set_pixel(x + ix, y + iy, color);
            }
        }
    }

    /// Fill every pixel whose squared distance from `(cx, cy)` is at most `r * r`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba8) {
        let r2 = r * r;
        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Integer Bresenham line, both endpoints included.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
        for (x, y) in line_points(x1, y1, x2, y2) {
            self.set_pixel(x, y, color);
        }
    }

    /// Perturb the RGB channels of every non-transparent pixel in the region with zero-mean
    /// Gaussian noise of standard deviation `intensity * 255`. Alpha is left alone.
    pub fn add_noise(&mut self, x: i32, y: i32, w: i32, h: i32, intensity: f64, rng: &mut Rng64) {
        let std_dev = intensity * 255.0;
        for py in y..y + h.max(0) {
            for px in x..x + w.max(0) {
                let Some(pixel) = self.get(px, py) else {
                    continue;
                };
                if pixel.is_transparent() {
                    continue;
                }
                let noisy = Rgba8 {
                    a: pixel.a,
                    ..pixel.map_rgb(|c| {
                        let delta = trunc_i32(rng.next_gaussian(0.0, std_dev));
                        (i32::from(c) + delta).clamp(0, 255) as u8
                    })
                };
                self.set_pixel(px, py, noisy);
            }
        }
    }
}

/// Pixels visited by Bresenham's algorithm from `(x1, y1)` to `(x2, y2)`, in order.
pub fn line_points(mut x1: i32, mut y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut out = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        out.push((x1, y1));
        if x1 == x2 && y1 == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
