use crate::foundation::core::Rgba8;

/// Named colors shared by every drawing routine.
///
/// The palette is plain data: build it once (usually [`Palette::CLASSIC`]) and pass it by
/// reference. Nothing mutates it after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub transparent: Rgba8,
    pub black: Rgba8,
    pub dark_outline: Rgba8,
    pub white: Rgba8,
    pub off_white: Rgba8,
    pub red: Rgba8,
    pub red_dark: Rgba8,
    pub red_light: Rgba8,
    pub blue: Rgba8,
    pub blue_dark: Rgba8,
    pub blue_light: Rgba8,
    pub blue_highlight: Rgba8,
    pub yellow: Rgba8,
    pub yellow_dark: Rgba8,
    pub gold: Rgba8,

    pub skin: Rgba8,
    pub skin_shadow: Rgba8,
    pub skin_dark: Rgba8,
    pub skin_highlight: Rgba8,

    pub brown: Rgba8,
    pub brown_dark: Rgba8,
    pub brown_light: Rgba8,

    pub gray: Rgba8,
    pub dark_gray: Rgba8,
    pub darker_gray: Rgba8,
    pub light_gray: Rgba8,
    pub lighter_gray: Rgba8,

    pub purple: Rgba8,
    pub purple_dark: Rgba8,
    pub curtain_red: Rgba8,
    pub curtain_dark: Rgba8,
    pub curtain_highlight: Rgba8,
    pub stage_wood: Rgba8,
    pub stage_wood_dark: Rgba8,
    pub stage_wood_light: Rgba8,
}

impl Palette {
    pub const CLASSIC: Palette = Palette {
        transparent: Rgba8::TRANSPARENT,
        black: Rgba8::opaque(0, 0, 0),
        dark_outline: Rgba8::opaque(20, 20, 35),
        white: Rgba8::opaque(255, 255, 255),
        off_white: Rgba8::opaque(245, 245, 240),
        red: Rgba8::opaque(255, 50, 50),
        red_dark: Rgba8::opaque(200, 30, 30),
        red_light: Rgba8::opaque(255, 100, 100),
        blue: Rgba8::opaque(50, 90, 200),
        blue_dark: Rgba8::opaque(30, 60, 150),
        blue_light: Rgba8::opaque(90, 140, 255),
        blue_highlight: Rgba8::opaque(120, 170, 255),
        yellow: Rgba8::opaque(255, 255, 0),
        yellow_dark: Rgba8::opaque(230, 230, 0),
        gold: Rgba8::opaque(255, 215, 0),

        skin: Rgba8::opaque(255, 213, 170),
        skin_shadow: Rgba8::opaque(235, 193, 150),
        skin_dark: Rgba8::opaque(215, 173, 130),
        skin_highlight: Rgba8::opaque(255, 233, 190),

        brown: Rgba8::opaque(139, 69, 19),
        brown_dark: Rgba8::opaque(99, 49, 9),
        brown_light: Rgba8::opaque(159, 89, 39),

        gray: Rgba8::opaque(120, 120, 120),
        dark_gray: Rgba8::opaque(70, 70, 70),
        darker_gray: Rgba8::opaque(40, 40, 40),
        light_gray: Rgba8::opaque(180, 180, 180),
        lighter_gray: Rgba8::opaque(220, 220, 220),

        purple: Rgba8::opaque(128, 0, 128),
        purple_dark: Rgba8::opaque(88, 0, 88),
        curtain_red: Rgba8::opaque(180, 30, 30),
        curtain_dark: Rgba8::opaque(120, 20, 20),
        curtain_highlight: Rgba8::opaque(210, 50, 50),
        stage_wood: Rgba8::opaque(160, 120, 80),
        stage_wood_dark: Rgba8::opaque(120, 90, 60),
        stage_wood_light: Rgba8::opaque(190, 150, 110),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
