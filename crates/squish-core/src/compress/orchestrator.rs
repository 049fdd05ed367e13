use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{Result, SquishError};
use crate::quality::Quality;

use super::encoder::Encoder;
use super::output::output_file_name;
use super::types::CompressionResult;

/// Encode `input` into `output` and measure both files.
pub fn compress_file(
    encoder: &dyn Encoder,
    input: &Path,
    output: &Path,
    quality: Quality,
) -> Result<CompressionResult> {
    if let Err(e) = encoder.encode(input, output, quality) {
        warn!(input = %input.display(), error = %e, "Encoding failed");
        return Err(e);
    }

    let output_size = fs::metadata(output)?.len();
    let input_size = fs::metadata(input)?.len();
    let result = CompressionResult::new(output.to_path_buf(), output_size, input_size);

    info!(
        quality = quality.get(),
        input_bytes = input_size,
        output_bytes = output_size,
        ratio_percent = result.ratio_percent,
        "Compressed"
    );
    Ok(result)
}

/// Holds the loaded input and knows where its compressed copy goes.
pub struct Compressor<E: Encoder> {
    encoder: E,
    pattern: String,
    output_dir: PathBuf,
    input: Option<PathBuf>,
}

impl<E: Encoder> Compressor<E> {
    pub fn new(encoder: E, pattern: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            encoder,
            pattern: pattern.into(),
            output_dir: output_dir.into(),
            input: None,
        }
    }

    pub fn from_config(encoder: E, config: &AppConfig) -> Self {
        Self::new(encoder, config.out_img_name_pat.clone(), config.output_dir())
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Make `path` the current input. Returns its size in bytes.
    pub fn load(&mut self, path: &Path) -> Result<u64> {
        let size = fs::metadata(path)?.len();
        self.input = Some(path.to_path_buf());
        info!(path = %path.display(), bytes = size, "Input loaded");
        Ok(size)
    }

    /// Where the compressed copy of the current input is written.
    pub fn output_path(&self) -> Result<PathBuf> {
        let input = self.input.as_deref().ok_or(SquishError::NoInputLoaded)?;
        Ok(self.output_dir.join(output_file_name(&self.pattern, input)))
    }

    pub fn compress(&self, quality: Quality) -> Result<CompressionResult> {
        let input = self.input.as_deref().ok_or(SquishError::NoInputLoaded)?;
        let output = self.output_path()?;
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }
        compress_file(&self.encoder, input, &output, quality)
    }
}
