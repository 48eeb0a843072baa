use crate::foundation::core::{Rgba8, Size};

/// An RGBA8 pixel buffer, row-major, origin top-left.
///
/// All writes go through bounds-checked accessors: a coordinate outside the canvas is silently
/// dropped rather than treated as an error. Pixels are straight (not premultiplied) alpha, which
/// is what PNG expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    data: Vec<u8>,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn blank(size: Size) -> Self {
        Self {
            size,
            data: vec![0; size.byte_len()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw RGBA bytes, tightly packed, top row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.size.width && (y as u32) < self.size.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(((y as usize) * (self.size.width as usize) + (x as usize)) * 4)
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Write `color` at `(x, y)`; no-op outside the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Left-right mirror image of this canvas.
    pub fn mirrored_horizontal(&self) -> Self {
        let row_bytes = self.size.width as usize * 4;
        if row_bytes == 0 {
            return self.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_bytes) {
            for px in row.chunks_exact(4).rev() {
                out.extend_from_slice(px);
            }
        }
        Self {
            size: self.size,
            data: out,
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
