use std::path::PathBuf;

use squish_core::compress::{CompressionResult, Generation};
use squish_core::quality::Quality;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Make `path` the input and decode it for display.
    LoadImage { path: PathBuf },

    /// Encode the current input. Only the newest queued request runs.
    Compress {
        generation: Generation,
        quality: Quality,
    },

    /// Copy the compressed output to `destination`; `None` means the dialog
    /// was dismissed.
    Save {
        source: PathBuf,
        destination: Option<PathBuf>,
    },

    /// Place the image at `path` on the system clipboard.
    CopyToClipboard { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: egui::ColorImage,
        size_bytes: u64,
    },
    Compressed {
        generation: Generation,
        result: CompressionResult,
        image: egui::ColorImage,
    },
    CompressFailed {
        generation: Generation,
        message: String,
    },
    /// The worker had no input to encode.
    CompressSkipped {
        generation: Generation,
    },
    Saved {
        path: PathBuf,
    },
    SaveFailed {
        message: String,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
