use super::*;

#[test]
fn blank_canvas_is_fully_transparent() {
    let c = Canvas::blank(Size::new(7, 5));
    assert_eq!(c.data().len(), 7 * 5 * 4);
    assert!(c.data().iter().all(|&b| b == 0));
    assert_eq!(c.opaque_pixel_count(), 0);
}

#[test]
fn out_of_bounds_writes_are_dropped() {
    let mut c = Canvas::blank(Size::new(4, 3));
    let red = Rgba8::opaque(255, 0, 0);
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX), (100, 100)] {
        c.set_pixel(x, y, red);
        assert_eq!(c.get(x, y), None);
    }
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn set_then_get_round_trips_one_pixel() {
    let mut c = Canvas::blank(Size::new(4, 3));
    let col = Rgba8::new(1, 2, 3, 4);
    c.set_pixel(3, 2, col);
    assert_eq!(c.get(3, 2), Some(col));
    assert_eq!(&c.data()[44..48], &[1, 2, 3, 4]);
    assert_eq!(c.opaque_pixel_count(), 1);
}

#[test]
fn mirror_flips_columns_only() {
    let mut c = Canvas::blank(Size::new(3, 2));
    let a = Rgba8::opaque(9, 9, 9);
    c.set_pixel(0, 1, a);
    let m = c.mirrored_horizontal();
    assert_eq!(m.get(2, 1), Some(a));
    assert_eq!(m.get(0, 1), Some(Rgba8::TRANSPARENT));
    assert_eq!(m.mirrored_horizontal(), c);
}
