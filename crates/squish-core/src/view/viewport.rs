use super::scrollbar::ScrollBar;
use super::types::{Axis, Vec2};

/// Display state of one image pane.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Native pixel size of the loaded image, if any.
    content_size: Option<Vec2>,
    viewport_size: Vec2,
    scale_factor: f32,
    horizontal: ScrollBar,
    vertical: ScrollBar,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            content_size: None,
            viewport_size: Vec2::ZERO,
            scale_factor: 1.0,
            horizontal: ScrollBar::default(),
            vertical: ScrollBar::default(),
        }
    }
}

impl ViewportState {
    /// Zero-area content counts as no content.
    pub fn has_content(&self) -> bool {
        self.content_size.is_some_and(Vec2::is_positive)
    }

    pub fn content_size(&self) -> Option<Vec2> {
        self.content_size
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Content size after scaling, zero when nothing is loaded.
    pub fn displayed_size(&self) -> Vec2 {
        self.content_size
            .map(|size| size * self.scale_factor)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn bar(&self, axis: Axis) -> &ScrollBar {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub(crate) fn bar_mut(&mut self, axis: Axis) -> &mut ScrollBar {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub fn scroll_offset(&self) -> Vec2 {
        Vec2::new(self.horizontal.value(), self.vertical.value())
    }

    /// Replace the content, keeping the current offsets where they still fit.
    pub(crate) fn set_content(&mut self, size: Option<Vec2>) {
        self.content_size = size;
        self.relayout();
    }

    pub(crate) fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = Vec2::new(size.x.max(0.0), size.y.max(0.0));
        self.relayout();
    }

    pub(crate) fn set_scale_factor(&mut self, scale: f32) {
        self.scale_factor = scale;
        self.relayout();
    }

    pub(crate) fn reset_scroll(&mut self) {
        self.horizontal.reset();
        self.vertical.reset();
    }

    fn relayout(&mut self) {
        let displayed = self.displayed_size();
        self.horizontal.configure(displayed.x, self.viewport_size.x);
        self.vertical.configure(displayed.y, self.viewport_size.y);
    }
}
