pub mod compress;
pub mod config;
pub mod info;
pub mod sweep;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use squish_core::compress::{Compressor, FfmpegEncoder};
use squish_core::config::AppConfig;

/// Load the config and build a compressor for `input`.
pub(crate) fn compressor_for(
    config_path: &Path,
    input: &Path,
    output_dir: Option<&PathBuf>,
) -> Result<(AppConfig, Compressor<FfmpegEncoder>)> {
    let mut config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    if let Some(dir) = output_dir {
        config.output_dir = Some(dir.clone());
    }

    let encoder = FfmpegEncoder::new(&config.encoder_program);
    let mut compressor = Compressor::from_config(encoder, &config);
    compressor
        .load(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    Ok((config, compressor))
}
