mod controls;
mod ui;
mod viewer;

pub use controls::QualityControls;
pub use ui::{Notification, UIState};
pub use viewer::ViewerState;
