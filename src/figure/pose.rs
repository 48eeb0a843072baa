/// Facial expression drawn by [`crate::figure::face::draw_face`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Expression {
    #[default]
    Neutral,
    Talking,
    Laughing,
    Thinking,
}

/// Which way the character is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Front,
    Left,
    Right,
}

impl Facing {
    /// Horizontal shift applied to the head when turned.
    pub fn head_offset(self) -> i32 {
        match self {
            Facing::Front => 0,
            Facing::Left => -4,
            Facing::Right => 4,
        }
    }

    /// Lowercase name used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Front => "front",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HairStyle {
    /// Balding on top with tufts at the sides.
    #[default]
    Comedian,
}
