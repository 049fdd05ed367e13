use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquishError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No input image loaded")]
    NoInputLoaded,

    #[error("Encoder failed (exit status {status:?}): {stderr}")]
    EncodingFailed { status: Option<i32>, stderr: String },

    #[error("Quality {0} is outside the range 1..=31")]
    InvalidQuality(i64),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Clipboard export is not supported on {0}")]
    ClipboardUnsupportedPlatform(String),

    #[error("Clipboard export failed: {0}")]
    ClipboardExportFailed(String),

    #[error("Failed to save {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SquishError>;
