use std::path::PathBuf;

use squish_core::compress::{CompressionResult, Generation};

/// Error shown in its own window until dismissed.
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub input_size_bytes: Option<u64>,

    /// Latest accepted compression.
    pub result: Option<CompressionResult>,

    /// Request awaiting a result (None = idle).
    pub in_flight: Option<Generation>,

    pub log_messages: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn notify(&mut self, title: &str, message: String) {
        self.add_log(format!("ERROR: {message}"));
        self.notifications.push(Notification {
            title: title.to_string(),
            message,
        });
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    /// Path of the compressed output currently on screen.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.result.as_ref().map(|r| r.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_logs_and_queues() {
        let mut state = UIState::default();
        state.notify("Encoding failed", "boom".into());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.log_messages, vec!["ERROR: boom".to_string()]);

        state.dismiss(5);
        assert_eq!(state.notifications.len(), 1);
        state.dismiss(0);
        assert!(state.notifications.is_empty());
    }
}
