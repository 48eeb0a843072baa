use std::path::PathBuf;

use crate::animation::laughing::laughing_keyframes;
use crate::animation::pacing::{PaceDirection, pacing_keyframes};
use crate::animation::talking::talking_keyframes;
use crate::animation::{FrameCtx, Keyframe};
use crate::assets::jokes::{JOKES_FILE, dad_jokes, jokes_to_json};
use crate::assets::palette::Palette;
use crate::encode::sink::{AssetSink, DirSink};
use crate::foundation::core::FrameCount;
use crate::foundation::error::ComedianResult;
use crate::scene::curtain::curtain_images;

pub const DEFAULT_OUT_DIR: &str = "comedian_assets";
pub const DEFAULT_SEED: u64 = 0x00C0_FFEE;

pub const PACING_FRAMES: u32 = 4;
pub const TALKING_FRAMES: u32 = 3;
pub const LAUGHING_FRAMES: u32 = 3;

/// Options for a full generation run.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Directory the assets are written into (created if missing).
    pub out_dir: PathBuf,
    /// Base seed for the texture noise.
    pub seed: u64,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            seed: DEFAULT_SEED,
        }
    }
}

/// File names written by a run, in write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub files: Vec<String>,
}

impl GenerationReport {
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|f| f.ends_with(".png"))
    }
}

fn save_all(
    sink: &mut dyn AssetSink,
    report: &mut GenerationReport,
    frames: &[Keyframe],
) -> ComedianResult<()> {
    for frame in frames {
        sink.write_image(&frame.name, &frame.canvas)?;
        println!("Saved {}", frame.name);
        report.files.push(frame.name.clone());
    }
    Ok(())
}

/// Generate every asset into `sink`: pacing (both directions), talking, laughing, curtain
/// variants, then the joke list.
///
/// An error aborts the run; anything already written stays written.
#[tracing::instrument(skip(sink, palette))]
pub fn generate_into(
    sink: &mut dyn AssetSink,
    palette: &Palette,
    seed: u64,
) -> ComedianResult<GenerationReport> {
    let ctx = FrameCtx::new(palette, seed);
    let mut report = GenerationReport::default();

    sink.begin()?;
    println!("Generating enhanced pixel art comedian assets with multi-frame animations...");

    println!("\nGenerating pacing animation frames...");
    let pacing = FrameCount::new(PACING_FRAMES)?;
    for direction in [PaceDirection::Right, PaceDirection::Left] {
        let frames = pacing_keyframes(&ctx, direction, pacing);
        save_all(sink, &mut report, &frames)?;
    }

    println!("\nGenerating talking animation frames...");
    let frames = talking_keyframes(&ctx, FrameCount::new(TALKING_FRAMES)?);
    save_all(sink, &mut report, &frames)?;

    println!("\nGenerating laughing animation frames...");
    let frames = laughing_keyframes(&ctx, FrameCount::new(LAUGHING_FRAMES)?);
    save_all(sink, &mut report, &frames)?;

    println!("\nGenerating environment assets...");
    save_all(sink, &mut report, &curtain_images(palette))?;

    println!("\nGenerating joke content...");
    let jokes = dad_jokes();
    sink.write_text(JOKES_FILE, &jokes_to_json(&jokes)?)?;
    println!("Created expanded dad jokes JSON file with multiple joke formats");
    report.files.push(JOKES_FILE.to_owned());

    tracing::info!(files = report.files.len(), "generation finished");
    Ok(report)
}

/// Generate every asset into `opts.out_dir` with the classic palette.
pub fn generate_all(opts: &GenerateOpts) -> ComedianResult<GenerationReport> {
    let mut sink = DirSink::new(&opts.out_dir);
    let report = generate_into(&mut sink, &Palette::CLASSIC, opts.seed)?;
    println!("\nAll enhanced assets generated successfully!");
    let shown = std::fs::canonicalize(sink.dir()).unwrap_or_else(|_| sink.dir().to_path_buf());
    println!("Assets saved to: {}", shown.display());
    Ok(report)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
