use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use squish_core::quality::Quality;

use crate::summary::print_compression_summary;

#[derive(Args)]
pub struct CompressArgs {
    /// Input image
    pub file: PathBuf,

    /// Encoder quality, 1 (best) to 31 (smallest); defaults to the config value
    #[arg(short, long)]
    pub quality: Option<i64>,

    /// Directory for the compressed copy
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &CompressArgs, config_path: &Path) -> Result<()> {
    let (config, compressor) =
        super::compressor_for(config_path, &args.file, args.output_dir.as_ref())?;

    let quality = match args.quality {
        Some(q) => Quality::new(q)?,
        None => config.default_quality(),
    };

    let result = compressor
        .compress(quality)
        .with_context(|| format!("Failed to compress {}", args.file.display()))?;

    print_compression_summary(&args.file, quality, &result);
    Ok(())
}
