use crate::animation::{FrameCtx, Keyframe};
use crate::assets::palette::Palette;
use crate::figure::body::{
    FigureLayout, LEG_WIDTH, draw_leg, draw_shoe, draw_torso, suit_tones,
};
use crate::figure::outfit::draw_outfit;
use crate::figure::pose::{Expression, Facing};
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::math::trunc_i32;
use crate::render::canvas::Canvas;

pub const STRIDE: f64 = 8.0;
const LEG_SPACING: i32 = 3;
const ARM_WIDTH: i32 = 6;
const ARM_HEIGHT: i32 = 25;
const ARM_GAP: i32 = 6;
const CLASPED_HANDS: (i32, i32) = (16, 8);

/// Direction of travel while pacing the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaceDirection {
    Left,
    Right,
}

impl PaceDirection {
    pub fn facing(self) -> Facing {
        match self {
            PaceDirection::Left => Facing::Left,
            PaceDirection::Right => Facing::Right,
        }
    }
}

/// Horizontal swing of the leading leg on `frame`; the two directions are mirror images.
pub fn forward_leg_offset(direction: PaceDirection, frame: FrameIndex, count: FrameCount) -> i32 {
    let swing = trunc_i32(STRIDE * frame.cycle_angle(count).sin());
    match direction {
        PaceDirection::Right => swing,
        PaceDirection::Left => -swing,
    }
}

/// Resting x of the leading and trailing legs before the stride swing is applied.
fn leg_bases(direction: PaceDirection, center_x: i32) -> (i32, i32) {
    let left_leg = center_x - LEG_WIDTH - LEG_SPACING;
    let right_leg = center_x + LEG_SPACING;
    match direction {
        PaceDirection::Right => (left_leg, right_leg),
        PaceDirection::Left => (right_leg, left_leg),
    }
}

/// Compose one pacing pose: turned head, hands clasped behind the back, legs mid-stride.
pub fn draw_pacing_figure(
    canvas: &mut Canvas,
    palette: &Palette,
    direction: PaceDirection,
    frame: FrameIndex,
    count: FrameCount,
) {
    let layout = FigureLayout::new(canvas.width(), 0);
    let cx = layout.center_x;

    draw_torso(canvas, palette, &layout, Expression::Neutral, direction.facing());

    let arm_y = layout.body_y + 8;
    draw_outfit(
        canvas,
        cx - ARM_GAP / 2 - ARM_WIDTH,
        arm_y,
        ARM_WIDTH,
        ARM_HEIGHT,
        suit_tones(palette),
    );
    draw_outfit(
        canvas,
        cx + ARM_GAP / 2,
        arm_y,
        ARM_WIDTH,
        ARM_HEIGHT,
        suit_tones(palette),
    );
    let (hand_w, hand_h) = CLASPED_HANDS;
    canvas.fill_rect(
        cx - hand_w / 2,
        arm_y + ARM_HEIGHT - 4,
        hand_w,
        hand_h,
        palette.skin,
    );

    let offset = forward_leg_offset(direction, frame, count);
    let (forward_base, back_base) = leg_bases(direction, cx);
    let forward_x = forward_base + offset;
    let back_x = back_base - offset;

    draw_leg(canvas, palette, &layout, forward_x);
    draw_leg(canvas, palette, &layout, back_x);
    draw_shoe(canvas, palette, &layout, forward_x);
    draw_shoe(canvas, palette, &layout, back_x);
}

pub fn pacing_file_name(direction: PaceDirection, frame: FrameIndex) -> String {
    format!(
        "comedian_pacing_{}_{}.png",
        direction.facing().as_str(),
        frame.ordinal()
    )
}

/// All pacing frames for one direction of travel.
#[tracing::instrument(skip(ctx))]
pub fn pacing_keyframes(
    ctx: &FrameCtx<'_>,
    direction: PaceDirection,
    count: FrameCount,
) -> Vec<Keyframe> {
    count
        .frames()
        .map(|frame| {
            let mut canvas = ctx.blank_canvas();
            draw_pacing_figure(&mut canvas, ctx.palette, direction, frame, count);
            ctx.finish(canvas, pacing_file_name(direction, frame))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pacing.rs"]
mod tests;
