pub mod body;
pub mod bow_tie;
pub mod face;
pub mod hair;
pub mod outfit;
pub mod pose;
