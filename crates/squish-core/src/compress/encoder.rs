use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::consts::DEFAULT_ENCODER_PROGRAM;
use crate::error::{Result, SquishError};
use crate::quality::Quality;

/// Something that turns `input` into a re-encoded `output` at `quality`.
pub trait Encoder: Send + Sync {
    fn name(&self) -> &str;

    /// Write `output`, overwriting any existing file.
    fn encode(&self, input: &Path, output: &Path, quality: Quality) -> Result<()>;
}

/// Runs an ffmpeg-compatible executable as a child process.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODER_PROGRAM)
    }
}

impl FfmpegEncoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for one encode.
    pub fn args(input: &Path, output: &Path, quality: Quality) -> Vec<OsString> {
        vec![
            "-i".into(),
            input.into(),
            "-q:v".into(),
            quality.get().to_string().into(),
            output.into(),
            "-y".into(),
            "-loglevel".into(),
            "quiet".into(),
        ]
    }

    /// True when the program can be launched and exits cleanly on `-version`.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Encoder for FfmpegEncoder {
    fn name(&self) -> &str {
        self.program.to_str().unwrap_or("encoder")
    }

    fn encode(&self, input: &Path, output: &Path, quality: Quality) -> Result<()> {
        let args = Self::args(input, output, quality);
        debug!(program = %self.program.display(), ?args, "Running encoder");

        let out = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SquishError::EncodingFailed {
                status: None,
                stderr: format!("failed to launch {}: {e}", self.program.display()),
            })?;

        if out.status.success() {
            Ok(())
        } else {
            Err(SquishError::EncodingFailed {
                status: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_layout() {
        let args = FfmpegEncoder::args(
            Path::new("in.png"),
            Path::new("out.jpg"),
            Quality::new(7).unwrap(),
        );
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            ["-i", "in.png", "-q:v", "7", "out.jpg", "-y", "-loglevel", "quiet"]
        );
    }

    #[test]
    fn test_missing_program_is_encoding_failure() {
        let encoder = FfmpegEncoder::new("squish-no-such-encoder");
        let err = encoder
            .encode(Path::new("a.png"), Path::new("b.jpg"), Quality::default())
            .unwrap_err();
        assert!(matches!(err, SquishError::EncodingFailed { status: None, .. }));
        assert!(!encoder.is_available());
    }
}
