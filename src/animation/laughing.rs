use crate::animation::keyframes::{
    ArmPose, ArmSide, Gesture, Sweep, laughing_arm_segment, laughing_hand_offset,
};
use crate::animation::talking::draw_gesture;
use crate::animation::{FrameCtx, Keyframe};
use crate::assets::palette::Palette;
use crate::figure::body::{FigureLayout, HEAD_SIZE, LEG_LENGTH, LEG_WIDTH, draw_shoe, draw_torso};
use crate::figure::pose::{Expression, Facing};
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::math::trunc_i32;
use crate::render::canvas::Canvas;

const LEG_GAP: i32 = 5;
const UPPER_LEG: i32 = 20;
/// Frame that carries the speech bubble.
pub const BUBBLE_FRAME: FrameIndex = FrameIndex(1);
pub const BUBBLE_WIDTH: i32 = 30;
pub const BUBBLE_HEIGHT: i32 = 15;

/// "HA!" as bubble-local pixel coordinates.
pub const HA_GLYPHS: [(i32, i32); 25] = [
    // H
    (3, 3),
    (3, 4),
    (3, 5),
    (3, 6),
    (3, 7),
    (4, 5),
    (5, 3),
    (5, 4),
    (5, 5),
    (5, 6),
    (5, 7),
    // A
    (8, 7),
    (8, 6),
    (8, 5),
    (8, 4),
    (9, 3),
    (9, 5),
    (10, 7),
    (10, 6),
    (10, 5),
    (10, 4),
    // !
    (13, 3),
    (13, 4),
    (13, 5),
    (13, 7),
];

/// How hard the character is laughing on `frame`, in `[0.6, 1.0]`.
pub fn laugh_intensity(frame: FrameIndex, count: FrameCount) -> f64 {
    0.8 + 0.2 * frame.cycle_angle(count).sin()
}

/// Whole-body vertical shift on `frame`.
pub fn laugh_bounce(frame: FrameIndex, count: FrameCount) -> i32 {
    trunc_i32(3.0 * frame.cycle_angle(count).sin())
}

/// Top-left of the bubble interior for a head drawn at `(head_x, head_y)`.
pub fn bubble_origin(head_x: i32, head_y: i32) -> (i32, i32) {
    (head_x + HEAD_SIZE + 5, head_y - 10)
}

fn draw_bent_leg(
    canvas: &mut Canvas,
    palette: &Palette,
    layout: &FigureLayout,
    hip_x: i32,
    knee_shift: i32,
    upper: i32,
) -> i32 {
    let hip_y = layout.hip_y();
    canvas.fill_rect(hip_x, hip_y, LEG_WIDTH, upper, palette.dark_gray);
    let lower_x = hip_x + knee_shift;
    canvas.fill_rect(
        lower_x,
        hip_y + upper,
        LEG_WIDTH,
        LEG_LENGTH - upper,
        palette.dark_gray,
    );
    lower_x
}

fn draw_speech_bubble(canvas: &mut Canvas, palette: &Palette, origin: (i32, i32)) {
    let (bx, by) = origin;
    for y in -1..=BUBBLE_HEIGHT {
        for x in -1..=BUBBLE_WIDTH {
            if y == -1 || y == BUBBLE_HEIGHT || x == -1 || x == BUBBLE_WIDTH {
                canvas.set_pixel(bx + x, by + y, palette.black);
            }
        }
    }
    canvas.fill_rect(bx, by, BUBBLE_WIDTH, BUBBLE_HEIGHT, palette.white);
    for (x, y) in HA_GLYPHS {
        canvas.set_pixel(bx + x, by + y, palette.black);
    }
}

/// Compose one laughing pose: bouncing body, arms thrown up, knees buckling.
pub fn draw_laughing_figure(
    canvas: &mut Canvas,
    palette: &Palette,
    frame: FrameIndex,
    count: FrameCount,
) {
    let layout = FigureLayout::new(canvas.width(), laugh_bounce(frame, count));
    let cx = layout.center_x;
    let intensity = laugh_intensity(frame, count);

    draw_torso(
        canvas,
        palette,
        &layout,
        Expression::Laughing,
        Facing::Front,
    );

    let left = [laughing_arm_segment(ArmSide::Left, intensity)];
    let right = [laughing_arm_segment(ArmSide::Right, intensity)];
    let gesture = Gesture {
        left: ArmPose {
            segments: &left,
            hand_offset: laughing_hand_offset(ArmSide::Left),
        },
        right: ArmPose {
            segments: &right,
            hand_offset: laughing_hand_offset(ArmSide::Right),
        },
        sweep: Sweep::Up,
    };
    draw_gesture(canvas, palette, &layout, &gesture);

    let knee_bend = trunc_i32(3.0 * intensity);
    let upper = UPPER_LEG - knee_bend;
    let left_foot_x = draw_bent_leg(
        canvas,
        palette,
        &layout,
        cx - LEG_WIDTH - LEG_GAP / 2,
        -knee_bend,
        upper,
    );
    let right_foot_x = draw_bent_leg(
        canvas,
        palette,
        &layout,
        cx + LEG_GAP / 2,
        knee_bend,
        upper,
    );
    draw_shoe(canvas, palette, &layout, left_foot_x);
    draw_shoe(canvas, palette, &layout, right_foot_x);

    if frame == BUBBLE_FRAME {
        draw_speech_bubble(
            canvas,
            palette,
            bubble_origin(layout.head_x, layout.head_y),
        );
    }
}

pub fn laughing_file_name(frame: FrameIndex) -> String {
    format!("comedian_laughing_{}.png", frame.ordinal())
}

#[tracing::instrument(skip(ctx))]
pub fn laughing_keyframes(ctx: &FrameCtx<'_>, count: FrameCount) -> Vec<Keyframe> {
    count
        .frames()
        .map(|frame| {
            let mut canvas = ctx.blank_canvas();
            draw_laughing_figure(&mut canvas, ctx.palette, frame, count);
            ctx.finish(canvas, laughing_file_name(frame))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/laughing.rs"]
mod tests;
