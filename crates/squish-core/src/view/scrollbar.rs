/// One axis of scroll state, modelled on a classic toolkit scroll bar.
///
/// The value always stays inside `[min, max]`. `page_step` is the visible
/// extent along this axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBar {
    min: f32,
    max: f32,
    value: f32,
    page_step: f32,
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            value: 0.0,
            page_step: 0.0,
        }
    }
}

impl ScrollBar {
    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn page_step(&self) -> f32 {
        self.page_step
    }

    /// Set the range and re-clamp the current value. `max` below `min` collapses
    /// the range to `min`.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max.max(min);
        self.value = self.value.clamp(self.min, self.max);
    }

    pub fn set_page_step(&mut self, page_step: f32) {
        self.page_step = page_step.max(0.0);
    }

    /// Size the bar for `content` pixels shown through a `visible` window.
    pub fn configure(&mut self, content: f32, visible: f32) {
        self.set_page_step(visible);
        self.set_range(0.0, (content - visible).max(0.0));
    }

    /// Clamp and store `value`. Returns `true` if the stored value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Position as a fraction of the scrollable range, `0.0` when nothing scrolls.
    pub fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    pub fn set_normalized(&mut self, fraction: f32) -> bool {
        let fraction = fraction.clamp(0.0, 1.0);
        self.set_value(self.min + (self.max - self.min) * fraction)
    }

    pub fn reset(&mut self) {
        self.value = self.min;
    }
}
