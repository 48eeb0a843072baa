//! Procedural pixel-art assets for a stand-up comedian act.
//!
//! Everything is drawn from code into in-memory RGBA canvases and written out once:
//!
//! 1. **Rasterize**: a small set of clipped primitives on [`Canvas`] (pixel, rectangle,
//!    circle, Bresenham line, Gaussian texture noise).
//! 2. **Compose**: face, hair, bow tie and shaded clothing routines parameterized by
//!    [`Expression`] and [`Facing`].
//! 3. **Animate**: pacing, talking and laughing generators produce one 96x96 frame per index.
//! 4. **Scene**: a 256x512 curtain backdrop shaded per pixel.
//! 5. **Write**: every canvas goes to an [`AssetSink`] as PNG, followed by the joke list as JSON.
//!
//! Output is deterministic: the only randomness is the texture noise, and it is seeded.
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod encode;
pub mod figure;
pub mod foundation;
pub mod pipeline;
pub mod render;
pub mod scene;

pub use animation::{FrameCtx, Keyframe, SPRITE_SIZE, TEXTURE_NOISE};
pub use assets::jokes::{JOKES_FILE, Joke, dad_jokes, jokes_to_json, validate_jokes};
pub use assets::palette::Palette;
pub use encode::sink::{AssetSink, DirSink, InMemorySink, StoredAsset};
pub use figure::pose::{Expression, Facing, HairStyle};
pub use foundation::core::{FrameCount, FrameIndex, Rgba8, Size};
pub use foundation::error::{ComedianError, ComedianResult};
pub use pipeline::{GenerateOpts, GenerationReport, generate_all, generate_into};
pub use render::canvas::Canvas;
pub use scene::curtain::CURTAIN_SIZE;
