use crate::animation::keyframes::{
    ARM_WIDTH, ArmSide, Gesture, HAND_SIZE, TALKING_GESTURES, draw_arm, hand_origin,
};
use crate::animation::{FrameCtx, Keyframe};
use crate::assets::palette::Palette;
use crate::figure::body::{BODY_WIDTH, FigureLayout, LEG_WIDTH, draw_leg, draw_shoe, draw_torso};
use crate::figure::pose::{Expression, Facing};
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::render::canvas::Canvas;

const LEG_GAP: i32 = 5;
const MOUTH_CYCLE: [Expression; 3] = [Expression::Talking, Expression::Neutral, Expression::Talking];

/// Mouth shape for a talking frame: open, closed, open, repeating.
pub fn talking_expression(frame: FrameIndex) -> Expression {
    MOUTH_CYCLE[frame.0 as usize % MOUTH_CYCLE.len()]
}

/// Arm gesture for a talking frame, cycling through the curated poses.
pub fn talking_gesture(frame: FrameIndex) -> &'static Gesture<'static> {
    &TALKING_GESTURES[frame.0 as usize % TALKING_GESTURES.len()]
}

pub(crate) fn draw_gesture(
    canvas: &mut Canvas,
    palette: &Palette,
    layout: &FigureLayout,
    gesture: &Gesture<'_>,
) {
    let shoulder_y = layout.shoulder_y();
    let left_end = draw_arm(
        canvas,
        palette.blue,
        ArmSide::Left,
        (layout.body_x - ARM_WIDTH, shoulder_y),
        gesture.left.segments,
        gesture.sweep,
    );
    let right_end = draw_arm(
        canvas,
        palette.blue,
        ArmSide::Right,
        (layout.body_x + BODY_WIDTH, shoulder_y),
        gesture.right.segments,
        gesture.sweep,
    );

    for (end, pose) in [(left_end, &gesture.left), (right_end, &gesture.right)] {
        let (hx, hy) = hand_origin(end, pose.hand_offset);
        canvas.fill_rect(hx, hy, HAND_SIZE, HAND_SIZE, palette.skin);
    }
}

/// Compose one talking pose facing the audience.
pub fn draw_talking_figure(canvas: &mut Canvas, palette: &Palette, frame: FrameIndex) {
    let layout = FigureLayout::new(canvas.width(), 0);
    let cx = layout.center_x;

    draw_torso(
        canvas,
        palette,
        &layout,
        talking_expression(frame),
        Facing::Front,
    );
    draw_gesture(canvas, palette, &layout, talking_gesture(frame));

    let left_leg_x = cx - LEG_WIDTH - LEG_GAP / 2;
    let right_leg_x = cx + LEG_GAP / 2;
    draw_leg(canvas, palette, &layout, left_leg_x);
    draw_leg(canvas, palette, &layout, right_leg_x);
    draw_shoe(canvas, palette, &layout, left_leg_x);
    draw_shoe(canvas, palette, &layout, right_leg_x);
}

pub fn talking_file_name(frame: FrameIndex) -> String {
    format!("comedian_talking_{}.png", frame.ordinal())
}

#[tracing::instrument(skip(ctx))]
pub fn talking_keyframes(ctx: &FrameCtx<'_>, count: FrameCount) -> Vec<Keyframe> {
    count
        .frames()
        .map(|frame| {
            let mut canvas = ctx.blank_canvas();
            draw_talking_figure(&mut canvas, ctx.palette, frame);
            ctx.finish(canvas, talking_file_name(frame))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/talking.rs"]
mod tests;
