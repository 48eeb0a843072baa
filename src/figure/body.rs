use crate::assets::palette::Palette;
use crate::figure::bow_tie::draw_bow_tie;
use crate::figure::face::draw_face;
use crate::figure::hair::draw_hair;
use crate::figure::outfit::{OutfitTones, draw_outfit};
use crate::figure::pose::{Expression, Facing, HairStyle};
use crate::render::canvas::Canvas;

pub const HEAD_SIZE: i32 = 24;
pub const BODY_WIDTH: i32 = 30;
pub const BODY_HEIGHT: i32 = 40;
pub const LEG_WIDTH: i32 = 10;
pub const LEG_LENGTH: i32 = 35;
pub const SHOE_WIDTH: i32 = 14;
pub const SHOE_HEIGHT: i32 = 6;
pub const BOW_TIE_SIZE: i32 = 12;

/// Anchor points for one character frame, derived from the sprite size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureLayout {
    pub center_x: i32,
    pub head_x: i32,
    pub head_y: i32,
    pub body_x: i32,
    pub body_y: i32,
}

impl FigureLayout {
    /// Standard layout for a `size` x `size` sprite, shifted down by `bounce` pixels.
    pub fn new(size: u32, bounce: i32) -> Self {
        let size = size as i32;
        let center_x = size / 2;
        let head_x = center_x - HEAD_SIZE / 2;
        let head_y = size / 4 + bounce;
        Self {
            center_x,
            head_x,
            head_y,
            body_x: center_x - BODY_WIDTH / 2,
            body_y: head_y + HEAD_SIZE - 5,
        }
    }

    /// Top edge of both legs.
    pub fn hip_y(&self) -> i32 {
        self.body_y + BODY_HEIGHT - 5
    }

    /// Top edge of the shoes; they overlap the last leg row by one pixel.
    pub fn shoe_y(&self) -> i32 {
        self.hip_y() + LEG_LENGTH - 1
    }

    /// Where arm strokes attach to the shoulders.
    pub fn shoulder_y(&self) -> i32 {
        self.body_y + 5
    }
}

pub fn suit_tones(palette: &Palette) -> OutfitTones {
    OutfitTones {
        main: palette.blue,
        shadow: palette.blue_dark,
        highlight: palette.blue_light,
    }
}

/// Jacket, collar, head and bow tie: the part of the character every animation shares.
pub fn draw_torso(
    canvas: &mut Canvas,
    palette: &Palette,
    layout: &FigureLayout,
    expression: Expression,
    facing: Facing,
) {
    draw_outfit(
        canvas,
        layout.body_x,
        layout.body_y,
        BODY_WIDTH,
        BODY_HEIGHT,
        suit_tones(palette),
    );

    canvas.fill_rect(
        layout.body_x + 5,
        layout.body_y,
        BODY_WIDTH - 10,
        8,
        palette.white,
    );

    draw_face(
        canvas,
        palette,
        layout.head_x,
        layout.head_y,
        expression,
        facing,
    );
    draw_hair(
        canvas,
        palette,
        layout.head_x,
        layout.head_y,
        HairStyle::Comedian,
        facing,
    );
    draw_bow_tie(
        canvas,
        palette,
        layout.center_x,
        layout.body_y + 6,
        BOW_TIE_SIZE,
    );
}

/// A straight leg with its shoe.
pub fn draw_leg(canvas: &mut Canvas, palette: &Palette, layout: &FigureLayout, leg_x: i32) {
    canvas.fill_rect(
        leg_x,
        layout.hip_y(),
        LEG_WIDTH,
        LEG_LENGTH,
        palette.dark_gray,
    );
}

pub fn draw_shoe(canvas: &mut Canvas, palette: &Palette, layout: &FigureLayout, leg_x: i32) {
    canvas.fill_rect(
        leg_x - 2,
        layout.shoe_y(),
        SHOE_WIDTH,
        SHOE_HEIGHT,
        palette.brown_dark,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/figure/body.rs"]
mod tests;
