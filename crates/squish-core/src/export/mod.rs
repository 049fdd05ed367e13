//! Getting the compressed image out of the application: clipboard, drag
//! payload and save-as.

mod clipboard;
mod drag;
mod save;

pub use clipboard::{exporter_for, platform_exporter, ClipboardExporter};
pub use drag::{file_uri, DragPayload, URI_LIST_MIME};
pub use save::{save_copy, SaveOutcome};
