//! Dual-viewport pan, zoom and scroll engine.
//!
//! Nothing here knows about a GUI toolkit. The shell feeds pointer, wheel and
//! resize events in and reads scroll offsets and the scale factor back out.

mod dual;
mod pan;
mod scrollbar;
mod sync;
mod types;
mod viewport;
mod wheel;

pub use dual::{DualViewport, ZoomDirection, ZoomSettings};
pub use pan::{PanTracker, PointerButton};
pub use scrollbar::ScrollBar;
pub use sync::SyncMode;
pub use types::{Axis, Pane, Vec2};
pub use viewport::ViewportState;
pub use wheel::{notch_scroll, WheelAction, WheelDispatcher, WheelEvent, WheelModifiers};
