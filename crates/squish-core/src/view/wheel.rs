use crate::consts::{WHEEL_NOTCH_UNITS, WHEEL_PAGE_DIVISOR, WHEEL_ZOOM_THRESHOLD};

use super::types::{Axis, Vec2};

/// Modifier state relevant to wheel handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelModifiers {
    /// Turns vertical wheel motion into zoom steps.
    pub zoom: bool,
    /// Turns vertical wheel motion into horizontal scrolling.
    pub horizontal: bool,
}

/// Wheel motion in raw units, 120 per notch, positive for away from the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta: Vec2,
    pub modifiers: WheelModifiers,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    Scroll { axis: Axis, amount: f32 },
    ZoomIn,
    ZoomOut,
}

/// Scroll distance for `delta` raw wheel units on a bar with `page_step`.
///
/// One notch moves a seventh of a page; finer wheels move proportionally less.
pub fn notch_scroll(delta: f32, page_step: f32) -> f32 {
    -delta / WHEEL_NOTCH_UNITS * page_step / WHEEL_PAGE_DIVISOR
}

/// Multiplexes wheel input into scroll and zoom actions.
#[derive(Clone, Debug, Default)]
pub struct WheelDispatcher {
    zoom_accumulator: f32,
}

impl WheelDispatcher {
    /// `page_step` holds the horizontal and vertical page steps of the pane
    /// under the pointer.
    pub fn dispatch(&mut self, event: WheelEvent, page_step: Vec2) -> Vec<WheelAction> {
        let mut actions = Vec::new();

        if event.delta.x != 0.0 {
            actions.push(WheelAction::Scroll {
                axis: Axis::Horizontal,
                amount: notch_scroll(event.delta.x, page_step.x),
            });
        }

        if !event.modifiers.zoom {
            self.zoom_accumulator = 0.0;
        }

        if event.delta.y == 0.0 {
            return actions;
        }

        if event.modifiers.zoom {
            self.zoom_accumulator += event.delta.y;
            if self.zoom_accumulator > WHEEL_ZOOM_THRESHOLD {
                self.zoom_accumulator = 0.0;
                actions.push(WheelAction::ZoomIn);
            } else if self.zoom_accumulator < -WHEEL_ZOOM_THRESHOLD {
                self.zoom_accumulator = 0.0;
                actions.push(WheelAction::ZoomOut);
            }
        } else if event.modifiers.horizontal {
            actions.push(WheelAction::Scroll {
                axis: Axis::Horizontal,
                amount: notch_scroll(event.delta.y, page_step.x),
            });
        } else {
            actions.push(WheelAction::Scroll {
                axis: Axis::Vertical,
                amount: notch_scroll(event.delta.y, page_step.y),
            });
        }

        actions
    }
}
