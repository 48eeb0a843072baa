use super::*;
use crate::foundation::core::Size;

const C: Rgba8 = Rgba8::opaque(0, 0, 255);

#[test]
fn segment_offsets_truncate_toward_zero() {
    assert_eq!(LimbSegment::new(0.0, 10).offset_at(10), (0, 10));
    assert_eq!(LimbSegment::new(PI / 2.0, 30).offset_at(30), (30, 0));
    assert_eq!(LimbSegment::new(-PI / 2.0, 30).offset_at(30), (-30, 0));
    // 28 * sin(pi/6) lands a hair under 14.
    assert_eq!(LimbSegment::new(PI / 6.0, 28).offset_at(28), (13, 24));
}

#[test]
fn straight_down_arm_sweeps_a_solid_strip() {
    let mut c = Canvas::blank(Size::square(32));
    let end = draw_arm(
        &mut c,
        C,
        ArmSide::Right,
        (10, 10),
        &[LimbSegment::new(0.0, 5)],
        Sweep::Down,
    );
    assert_eq!(end, (10, 15));
    assert_eq!(c.get(10, 10), Some(C));
    assert_eq!(c.get(17, 17), Some(C));
    assert_eq!(c.opaque_pixel_count(), 8 * 8);
}

#[test]
fn left_side_mirrors_and_up_sweep_rises() {
    let mut c = Canvas::blank(Size::square(32));
    let sideways = [LimbSegment::new(PI / 2.0, 3)];
    assert_eq!(
        draw_arm(&mut c, C, ArmSide::Left, (10, 10), &sideways, Sweep::Down),
        (7, 10)
    );
    assert_eq!(
        draw_arm(&mut c, C, ArmSide::Right, (10, 10), &sideways, Sweep::Down),
        (13, 10)
    );
    let straight = [LimbSegment::new(0.0, 5)];
    assert_eq!(
        draw_arm(&mut c, C, ArmSide::Left, (10, 20), &straight, Sweep::Up),
        (10, 15)
    );
}

#[test]
fn talking_gesture_endpoints_from_the_shoulders() {
    let mut c = Canvas::blank(Size::square(96));
    let left = (25, 48);
    let right = (63, 48);
    let expected = [((12, 72), (33, 48)), ((4, 69), (42, 69)), ((19, 72), (57, 87))];
    for (gesture, (l, r)) in TALKING_GESTURES.iter().zip(expected) {
        assert_eq!(
            draw_arm(
                &mut c,
                C,
                ArmSide::Left,
                left,
                gesture.left.segments,
                gesture.sweep
            ),
            l
        );
        assert_eq!(
            draw_arm(
                &mut c,
                C,
                ArmSide::Right,
                right,
                gesture.right.segments,
                gesture.sweep
            ),
            r
        );
    }
}

#[test]
fn bent_arm_chains_its_segments() {
    let bent = TALKING_GESTURES[2].right.segments;
    assert_eq!(bent.len(), 2);
    let mut c = Canvas::blank(Size::square(96));
    let end = draw_arm(&mut c, C, ArmSide::Right, (63, 48), bent, Sweep::Down);
    // Forearm hangs straight down from the elbow.
    assert_eq!(end.0, 57);
    assert_eq!(c.get(57, 80), Some(C));
}

#[test]
fn laughing_arms_scale_with_intensity() {
    let l = laughing_arm_segment(ArmSide::Left, 1.0);
    let r = laughing_arm_segment(ArmSide::Right, 0.5);
    assert!((l.angle - PI / 3.0).abs() < 1e-12);
    assert!((r.angle + PI / 6.0).abs() < 1e-12);
    assert_eq!((l.length, r.length), (30, 30));
    assert_eq!(laughing_hand_offset(ArmSide::Left), (-10, -5));
    assert_eq!(laughing_hand_offset(ArmSide::Right), (0, -5));
}

#[test]
fn hand_origin_applies_offset() {
    assert_eq!(hand_origin((12, 72), (-10, -5)), (2, 67));
    assert_eq!(hand_origin((33, 48), (-5, -10)), (28, 38));
}
