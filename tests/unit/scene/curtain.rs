use super::*;

const P: Palette = Palette::CLASSIC;

#[test]
fn fold_bands_split_at_five_and_ten() {
    assert_eq!(FoldBand::classify(10.5), FoldBand::DeepShadow);
    assert_eq!(FoldBand::classify(10.0), FoldBand::MediumShadow);
    assert_eq!(FoldBand::classify(5.5), FoldBand::MediumShadow);
    assert_eq!(FoldBand::classify(5.0), FoldBand::Base);
    assert_eq!(FoldBand::classify(-5.0), FoldBand::Base);
    assert_eq!(FoldBand::classify(-5.5), FoldBand::Highlight);
}

#[test]
fn center_column_is_unshaded() {
    // x = 128 is the middle of a 256 wide panel, so no edge darkening applies.
    assert_eq!(cloth_color(&P, 128, 22, 256), P.curtain_red);
    assert_eq!(cloth_color(&P, 128, 15, 256), P.curtain_red);
    assert_eq!(cloth_color(&P, 128, 55, 256), P.curtain_dark);
    assert_eq!(
        cloth_color(&P, 128, 213, 256),
        Rgba8::opaque(240, 80, 80)
    );
}

#[test]
fn edges_darken_and_clamp_at_zero() {
    assert!(fold_pattern(0, 33) > 5.0 && fold_pattern(0, 33) <= 10.0);
    assert_eq!(cloth_color(&P, 0, 33, 256), Rgba8::opaque(145, 0, 0));
}

#[test]
fn rod_has_three_tones_and_bracket_highlights() {
    let c = draw_curtain(&P);
    assert_eq!(c.get(0, 0), Some(P.lighter_gray));
    assert_eq!(c.get(30, 6), Some(P.lighter_gray));
    assert_eq!(c.get(10, 0), Some(P.light_gray));
    assert_eq!(c.get(10, 6), Some(P.gray));
    assert_eq!(c.get(0, 8), Some(P.gray));
    assert_eq!(c.get(10, 14), Some(P.dark_gray));
}

#[test]
fn ties_hang_down_the_left_side() {
    let c = draw_curtain(&P);
    // Rope center at the top of the first tie, then the checkered tassel below it.
    assert_eq!(c.get(40, 100), Some(P.gold));
    assert_eq!(c.get(32, 130), Some(P.gold));
    assert_eq!(c.get(33, 130), Some(P.gold));
    assert_ne!(c.get(34, 130), Some(P.gold));
}

#[test]
fn curtain_is_opaque_and_full_size() {
    let c = draw_curtain(&P);
    assert_eq!(c.size(), CURTAIN_SIZE);
    assert_eq!(c.opaque_pixel_count(), 256 * 512);
}

#[test]
fn right_panel_mirrors_the_left() {
    let images = curtain_images(&P);
    let names: Vec<&str> = images.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, ["curtain_left.png", "curtain_right.png", "curtain.png"]);

    let (left, right, backdrop) = (&images[0].canvas, &images[1].canvas, &images[2].canvas);
    assert_eq!(left, backdrop);
    assert_ne!(left, right);
    for (x, y) in [(0, 0), (40, 100), (128, 300), (255, 511)] {
        assert_eq!(right.get(255 - x, y), left.get(x, y));
    }
}
