use super::*;
use crate::foundation::core::Rgba8;

const P: Palette = Palette::CLASSIC;

fn plain(frame: u32) -> Canvas {
    let ctx = FrameCtx::new(&P, 1).without_noise();
    let mut c = ctx.blank_canvas();
    draw_talking_figure(&mut c, &P, FrameIndex(frame));
    c
}

#[test]
fn mouth_opens_and_closes() {
    let cycle: Vec<Expression> = (0..6).map(|i| talking_expression(FrameIndex(i))).collect();
    assert_eq!(
        cycle,
        [
            Expression::Talking,
            Expression::Neutral,
            Expression::Talking,
            Expression::Talking,
            Expression::Neutral,
            Expression::Talking,
        ]
    );
}

#[test]
fn gestures_repeat_past_the_table() {
    assert_eq!(talking_gesture(FrameIndex(0)), &TALKING_GESTURES[0]);
    assert_eq!(talking_gesture(FrameIndex(4)), &TALKING_GESTURES[1]);
}

#[test]
fn raised_hand_covers_the_chin() {
    let c = plain(0);
    assert_eq!(c.get(30, 40), Some(P.skin));
    assert_eq!(c.get(8, 72), Some(P.skin));
    assert_eq!(c.get(20, 60), Some(P.blue));
    assert_eq!(c.get(1, 70), Some(Rgba8::TRANSPARENT));
}

#[test]
fn open_arms_reach_the_left_edge() {
    let c = plain(1);
    assert_eq!(c.get(1, 70), Some(P.skin));
    assert_eq!(c.get(45, 70), Some(P.skin));
    assert_eq!(c.get(8, 72), Some(Rgba8::TRANSPARENT));
}

#[test]
fn bent_arm_hand_hangs_beside_the_leg() {
    let c = plain(2);
    assert_eq!(c.get(62, 88), Some(P.skin));
    assert_eq!(c.get(14, 70), Some(P.skin));
    assert_eq!(c.get(1, 70), Some(Rgba8::TRANSPARENT));
}

#[test]
fn legs_stand_still_every_frame() {
    for frame in 0..3 {
        let c = plain(frame);
        assert_eq!(c.get(36, 85), Some(P.dark_gray));
        assert_eq!(c.get(45, 85), Some(P.dark_gray));
        assert_eq!(c.get(47, 90), Some(Rgba8::TRANSPARENT));
        assert_eq!(c.get(51, 95), Some(P.dark_gray));
    }
}

#[test]
fn keyframes_are_named_and_textured() {
    let ctx = FrameCtx::new(&P, 3);
    let frames = talking_keyframes(&ctx, FrameCount::new(3).unwrap());
    let names: Vec<&str> = frames.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "comedian_talking_1.png",
            "comedian_talking_2.png",
            "comedian_talking_3.png",
        ]
    );
    let counts: Vec<usize> = frames.iter().map(|k| k.canvas.opaque_pixel_count()).collect();
    assert_eq!(counts, [2417, 2310, 2523]);
    assert_ne!(frames[1].canvas, plain(1));
}
