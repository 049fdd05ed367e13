use std::path::Path;
use std::sync::mpsc;

use squish_core::export::{save_copy, ClipboardExporter, SaveOutcome};

use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_save(
    source: &Path,
    destination: Option<&Path>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_copy(source, destination) {
        Ok(SaveOutcome::Saved(path)) => send(tx, ctx, WorkerResult::Saved { path }),
        Ok(SaveOutcome::Cancelled) => send_log(tx, ctx, "Save cancelled"),
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::SaveFailed {
                message: e.to_string(),
            },
        ),
    }
}

/// Clipboard failures are reported in the log only.
pub(super) fn handle_copy_to_clipboard(
    exporter: &dyn ClipboardExporter,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match exporter.copy_image(path) {
        Ok(()) => send_log(tx, ctx, format!("Copied to clipboard via {}", exporter.name())),
        Err(e) => send_log(tx, ctx, format!("Clipboard copy failed: {e}")),
    }
}
