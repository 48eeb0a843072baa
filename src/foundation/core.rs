/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Apply `f` to each color channel, forcing the result opaque.
    pub fn map_rgb(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::opaque(f(self.r), f(self.g), f(self.b))
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Zero-based frame index inside one animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// Phase of this frame around a full cycle of `count` frames, in radians.
    pub fn cycle_angle(self, count: FrameCount) -> f64 {
        std::f64::consts::TAU * f64::from(self.0) / f64::from(count.get())
    }

    /// One-based number used in output file names.
    pub fn ordinal(self) -> u32 {
        self.0 + 1
    }
}

/// Number of frames in an animation; never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCount(u32);

impl FrameCount {
    pub fn new(n: u32) -> crate::foundation::error::ComedianResult<Self> {
        if n == 0 {
            return Err(crate::foundation::error::ComedianError::validation(
                "frame count must be > 0",
            ));
        }
        Ok(Self(n))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
