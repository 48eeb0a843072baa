use crate::foundation::core::Rgba8;
use crate::render::canvas::Canvas;

/// Three tones for a shaded block of clothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutfitTones {
    pub main: Rgba8,
    pub shadow: Rgba8,
    pub highlight: Rgba8,
}

/// Draw a bevelled block: shadow along the left and bottom edges, highlight along the right
/// edge (above the bottom shadow) and along the top between the two side strips.
pub fn draw_outfit(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, tones: OutfitTones) {
    canvas.fill_rect(x, y, w, h, tones.main);

    let shadow_w = (w / 8).max(2);
    let shadow_h = (h / 8).max(2);
    canvas.fill_rect(x, y, shadow_w, h, tones.shadow);
    canvas.fill_rect(x, y + h - shadow_h, w, shadow_h, tones.shadow);

    let highlight_w = (w / 10).max(2);
    let highlight_h = (h / 10).max(2);
    canvas.fill_rect(
        x + w - highlight_w,
        y,
        highlight_w,
        h - shadow_h,
        tones.highlight,
    );
    canvas.fill_rect(
        x + shadow_w,
        y,
        w - shadow_w - highlight_w,
        highlight_h,
        tones.highlight,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/figure/outfit.rs"]
mod tests;
