use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate the comedian sprite sheets, curtain backdrop and joke list.
#[derive(Parser, Debug)]
#[command(name = "comedian-assets", version)]
struct Cli {
    /// Output directory (created if missing).
    #[arg(long, default_value = comedian::pipeline::DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Seed for the texture noise.
    #[arg(long, default_value_t = comedian::pipeline::DEFAULT_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = comedian::GenerateOpts {
        out_dir: cli.out,
        seed: cli.seed,
    };

    comedian::generate_all(&opts)
        .with_context(|| format!("generate assets into '{}'", opts.out_dir.display()))?;
    Ok(())
}
