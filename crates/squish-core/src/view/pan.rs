use crate::consts::PAN_ACCELERATION;

use super::types::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Button that starts and ends a pan. Press and release must agree.
const PAN_BUTTON: PointerButton = PointerButton::Primary;

#[derive(Clone, Copy, Debug, PartialEq)]
struct PanAnchor {
    pointer: Vec2,
    scroll: Vec2,
}

/// Click-and-drag panning.
///
/// Dragging right or down moves the view left or up, so the image follows the
/// pointer.
#[derive(Clone, Debug, Default)]
pub struct PanTracker {
    anchor: Option<PanAnchor>,
}

impl PanTracker {
    pub fn is_panning(&self) -> bool {
        self.anchor.is_some()
    }

    /// Record the anchor. Only the primary button starts a pan.
    pub fn press(&mut self, button: PointerButton, pointer: Vec2, scroll: Vec2) -> bool {
        if button != PAN_BUTTON {
            return false;
        }
        self.anchor = Some(PanAnchor { pointer, scroll });
        true
    }

    /// Scroll offset for the pointer at `pointer`, or `None` when not panning.
    pub fn drag(&self, pointer: Vec2, accelerate: bool) -> Option<Vec2> {
        let anchor = self.anchor?;
        let factor = if accelerate { PAN_ACCELERATION } else { 1.0 };
        Some(anchor.scroll - (pointer - anchor.pointer) * factor)
    }

    pub fn release(&mut self, button: PointerButton) -> bool {
        if button != PAN_BUTTON || self.anchor.is_none() {
            return false;
        }
        self.anchor = None;
        true
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}
