use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, SquishError};

/// Result of a save-as. A dismissed dialog is an outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Copy `source` to the user's chosen `destination`, if any.
pub fn save_copy(source: &Path, destination: Option<&Path>) -> Result<SaveOutcome> {
    let Some(destination) = destination else {
        info!("Save cancelled");
        return Ok(SaveOutcome::Cancelled);
    };

    fs::copy(source, destination).map_err(|e| SquishError::SaveFailed {
        path: destination.to_path_buf(),
        source: e,
    })?;
    info!(path = %destination.display(), "Image saved");
    Ok(SaveOutcome::Saved(destination.to_path_buf()))
}
