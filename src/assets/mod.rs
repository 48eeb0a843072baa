pub mod jokes;
pub mod palette;
