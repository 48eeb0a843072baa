//! Character animations. Every generator builds one canvas per frame index, composes the
//! figure in a fixed order, then runs a low-amplitude noise pass for texture.

pub mod keyframes;
pub mod laughing;
pub mod pacing;
pub mod talking;

use crate::assets::palette::Palette;
use crate::foundation::core::Size;
use crate::foundation::math::{Rng64, asset_seed};
use crate::render::canvas::Canvas;

/// Character sprites are square.
pub const SPRITE_SIZE: u32 = 96;
/// Noise strength applied to every finished character frame.
pub const TEXTURE_NOISE: f64 = 0.02;

/// Shared inputs for frame generation.
#[derive(Clone, Copy, Debug)]
pub struct FrameCtx<'a> {
    pub palette: &'a Palette,
    pub size: u32,
    pub noise_intensity: f64,
    pub seed: u64,
}

impl<'a> FrameCtx<'a> {
    pub fn new(palette: &'a Palette, seed: u64) -> Self {
        Self {
            palette,
            size: SPRITE_SIZE,
            noise_intensity: TEXTURE_NOISE,
            seed,
        }
    }

    /// Same context with the texture pass disabled; handy for exact pixel checks.
    pub fn without_noise(self) -> Self {
        Self {
            noise_intensity: 0.0,
            ..self
        }
    }

    pub fn blank_canvas(&self) -> Canvas {
        Canvas::blank(Size::square(self.size))
    }

    /// Apply the texture pass and wrap the canvas under its output file name.
    pub fn finish(&self, mut canvas: Canvas, name: String) -> Keyframe {
        if self.noise_intensity > 0.0 {
            let mut rng = Rng64::new(asset_seed(self.seed, &name));
            let (w, h) = (canvas.width() as i32, canvas.height() as i32);
            canvas.add_noise(0, 0, w, h, self.noise_intensity, &mut rng);
        }
        Keyframe { name, canvas }
    }
}

/// One finished image and the file name it is written under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub name: String,
    pub canvas: Canvas,
}
