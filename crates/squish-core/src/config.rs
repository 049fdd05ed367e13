use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{DEFAULT_ENCODER_PROGRAM, DEFAULT_OUTPUT_PATTERN, DEFAULT_QUALITY};
use crate::error::{Result, SquishError};
use crate::quality::Quality;
use crate::view::{SyncMode, ZoomSettings};

/// Application settings, read from a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quality selected when the application starts (1..=31).
    pub default_compression_value: u8,
    /// Output file name; `*` is replaced by the input's stem.
    pub out_img_name_pat: String,
    /// Directory the open dialog starts in.
    pub load_folder: PathBuf,
    /// Where compressed copies are written. Defaults to the system temp dir.
    pub output_dir: Option<PathBuf>,
    pub encoder_program: String,
    pub scroll_sync: SyncMode,
    pub zoom: ZoomSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_compression_value: DEFAULT_QUALITY,
            out_img_name_pat: DEFAULT_OUTPUT_PATTERN.to_string(),
            load_folder: PathBuf::from("."),
            output_dir: None,
            encoder_program: DEFAULT_ENCODER_PROGRAM.to_string(),
            scroll_sync: SyncMode::default(),
            zoom: ZoomSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        Quality::new(self.default_compression_value as i64)?;
        if !self.out_img_name_pat.contains('*') {
            return Err(SquishError::InvalidConfig(format!(
                "out_img_name_pat must contain a '*' placeholder (got {:?})",
                self.out_img_name_pat
            )));
        }
        if self.out_img_name_pat.contains(['/', '\\']) {
            return Err(SquishError::InvalidConfig(
                "out_img_name_pat must be a file name, not a path".into(),
            ));
        }
        if self.encoder_program.trim().is_empty() {
            return Err(SquishError::InvalidConfig("encoder_program is empty".into()));
        }
        self.zoom.validate()
    }

    pub fn default_quality(&self) -> Quality {
        Quality::clamped(self.default_compression_value as i64)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
