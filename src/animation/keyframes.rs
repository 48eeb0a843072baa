//! Hand-placed arm poses. Each arm is a chain of straight segments swept from the shoulder;
//! the angles are curated per frame, not solved.

use std::f64::consts::PI;

use crate::foundation::core::Rgba8;
use crate::foundation::math::trunc_i32;
use crate::render::canvas::Canvas;

pub const ARM_WIDTH: i32 = 8;
pub const ARM_STROKE: i32 = 4;
pub const HAND_SIZE: i32 = 10;

/// One straight piece of a limb. `angle` is measured from straight down (0) toward the
/// outside of the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimbSegment {
    pub angle: f64,
    pub length: i32,
}

impl LimbSegment {
    pub const fn new(angle: f64, length: i32) -> Self {
        Self { angle, length }
    }

    /// Offset reached after `t` pixels along this segment.
    pub fn offset_at(self, t: i32) -> (i32, i32) {
        let t = f64::from(t);
        (
            trunc_i32(t * self.angle.sin()),
            trunc_i32(t * self.angle.cos()),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    fn x_sign(self) -> i32 {
        match self {
            ArmSide::Left => -1,
            ArmSide::Right => 1,
        }
    }
}

/// Whether the segment's cosine component moves the stroke down the body or up over the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    Down,
    Up,
}

impl Sweep {
    fn y_sign(self) -> i32 {
        match self {
            Sweep::Down => 1,
            Sweep::Up => -1,
        }
    }
}

/// One arm: its segments plus where the hand square sits relative to the arm's endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmPose<'a> {
    pub segments: &'a [LimbSegment],
    pub hand_offset: (i32, i32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture<'a> {
    pub left: ArmPose<'a>,
    pub right: ArmPose<'a>,
    pub sweep: Sweep,
}

const LEFT_HAND: (i32, i32) = (-HAND_SIZE, -HAND_SIZE / 2);
const RIGHT_HAND: (i32, i32) = (0, -HAND_SIZE / 2);
const RIGHT_HAND_RAISED: (i32, i32) = (-HAND_SIZE / 2, -HAND_SIZE);

const TALK_0_LEFT: [LimbSegment; 1] = [LimbSegment::new(PI / 6.0, 28)];
const TALK_0_RIGHT: [LimbSegment; 1] = [LimbSegment::new(-PI / 2.0, 30)];
const TALK_1_LEFT: [LimbSegment; 1] = [LimbSegment::new(PI / 4.0, 30)];
const TALK_1_RIGHT: [LimbSegment; 1] = [LimbSegment::new(-PI / 4.0, 30)];
const TALK_2_LEFT: [LimbSegment; 1] = [LimbSegment::new(PI / 12.0, 25)];
const TALK_2_RIGHT: [LimbSegment; 2] = [
    LimbSegment::new(-PI / 12.0, 25),
    LimbSegment::new(0.0, 15),
];

/// Talking gestures by frame: one arm raised, both arms out, one arm bent forward.
pub const TALKING_GESTURES: [Gesture<'static>; 3] = [
    Gesture {
        left: ArmPose {
            segments: &TALK_0_LEFT,
            hand_offset: LEFT_HAND,
        },
        right: ArmPose {
            segments: &TALK_0_RIGHT,
            hand_offset: RIGHT_HAND_RAISED,
        },
        sweep: Sweep::Down,
    },
    Gesture {
        left: ArmPose {
            segments: &TALK_1_LEFT,
            hand_offset: LEFT_HAND,
        },
        right: ArmPose {
            segments: &TALK_1_RIGHT,
            hand_offset: RIGHT_HAND,
        },
        sweep: Sweep::Down,
    },
    Gesture {
        left: ArmPose {
            segments: &TALK_2_LEFT,
            hand_offset: LEFT_HAND,
        },
        right: ArmPose {
            segments: &TALK_2_RIGHT,
            hand_offset: RIGHT_HAND,
        },
        sweep: Sweep::Down,
    },
];

/// Raise angle for laughing arms, scaled by how hard the character is laughing.
pub fn laughing_arm_segment(side: ArmSide, intensity: f64) -> LimbSegment {
    let angle = PI / 3.0 * intensity;
    match side {
        ArmSide::Left => LimbSegment::new(angle, 30),
        ArmSide::Right => LimbSegment::new(-angle, 30),
    }
}

pub fn laughing_hand_offset(side: ArmSide) -> (i32, i32) {
    match side {
        ArmSide::Left => LEFT_HAND,
        ArmSide::Right => RIGHT_HAND,
    }
}

/// Sweep an arm's segments from `origin`, returning the final endpoint.
pub fn draw_arm(
    canvas: &mut Canvas,
    color: Rgba8,
    side: ArmSide,
    origin: (i32, i32),
    segments: &[LimbSegment],
    sweep: Sweep,
) -> (i32, i32) {
    let sx = side.x_sign();
    let sy = sweep.y_sign();
    let (mut x, mut y) = origin;
    for seg in segments {
        for t in 0..seg.length {
            let (dx, dy) = seg.offset_at(t);
            canvas.fill_rect(x + sx * dx, y + sy * dy, ARM_WIDTH, ARM_STROKE, color);
        }
        let (dx, dy) = seg.offset_at(seg.length);
        x += sx * dx;
        y += sy * dy;
    }
    (x, y)
}

/// Where the hand square's top-left corner goes for an arm ending at `end`.
pub fn hand_origin(end: (i32, i32), hand_offset: (i32, i32)) -> (i32, i32) {
    (end.0 + hand_offset.0, end.1 + hand_offset.1)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
