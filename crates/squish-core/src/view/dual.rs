use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{SCALE_MAX, SCALE_MIN, ZOOM_IN_STEP, ZOOM_OUT_STEP};
use crate::error::{Result, SquishError};

use super::sync::SyncMode;
use super::types::{Axis, Pane, Vec2};
use super::viewport::ViewportState;
use super::wheel::WheelAction;

/// Zoom bounds and step multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f32,
    pub max: f32,
    pub step_in: f32,
    pub step_out: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
            step_in: ZOOM_IN_STEP,
            step_out: ZOOM_OUT_STEP,
        }
    }
}

impl ZoomSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.min > 0.0 && self.min <= 1.0 && self.max >= 1.0) {
            return Err(SquishError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min <= 1 <= max (got {}..{})",
                self.min, self.max
            )));
        }
        if self.step_in <= 1.0 || self.step_out <= 0.0 || self.step_out >= 1.0 {
            return Err(SquishError::InvalidConfig(format!(
                "zoom steps must satisfy step_in > 1 and 0 < step_out < 1 (got {} / {})",
                self.step_in, self.step_out
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Original and compressed panes sharing one scale factor, with scroll
/// offsets kept in step by a [`SyncMode`].
#[derive(Clone, Debug)]
pub struct DualViewport {
    original: ViewportState,
    compressed: ViewportState,
    scale_factor: f32,
    zoom: ZoomSettings,
    sync: SyncMode,
}

impl Default for DualViewport {
    fn default() -> Self {
        Self::new(ZoomSettings::default(), SyncMode::default())
    }
}

impl DualViewport {
    pub fn new(zoom: ZoomSettings, sync: SyncMode) -> Self {
        Self {
            original: ViewportState::default(),
            compressed: ViewportState::default(),
            scale_factor: 1.0,
            zoom,
            sync,
        }
    }

    pub fn pane(&self, pane: Pane) -> &ViewportState {
        match pane {
            Pane::Original => &self.original,
            Pane::Compressed => &self.compressed,
        }
    }

    fn pane_mut(&mut self, pane: Pane) -> &mut ViewportState {
        match pane {
            Pane::Original => &mut self.original,
            Pane::Compressed => &mut self.compressed,
        }
    }

    pub fn original(&self) -> &ViewportState {
        &self.original
    }

    pub fn compressed(&self) -> &ViewportState {
        &self.compressed
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn zoom_settings(&self) -> ZoomSettings {
        self.zoom
    }

    pub fn sync_mode(&self) -> SyncMode {
        self.sync
    }

    pub fn set_sync_mode(&mut self, sync: SyncMode) {
        self.sync = sync;
    }

    /// Pane whose bars take user input aimed at `pane`.
    ///
    /// Until a compressed preview exists its bars have no range, so input
    /// stays on the pane it was aimed at.
    pub fn driver(&self, pane: Pane) -> Pane {
        match self.sync.driver(pane) {
            Pane::Compressed if !self.compressed.has_content() => pane,
            driver => driver,
        }
    }

    pub fn has_content(&self) -> bool {
        self.original.has_content()
    }

    /// Start over with a freshly loaded original image.
    ///
    /// Scale returns to 1.0, both panes scroll to the origin and the previous
    /// compressed preview is dropped.
    pub fn load_original(&mut self, native_size: Vec2) {
        self.scale_factor = 1.0;
        for pane in Pane::BOTH {
            let state = self.pane_mut(pane);
            state.set_scale_factor(1.0);
            state.reset_scroll();
        }
        self.original.set_content(Some(native_size));
        self.compressed.set_content(None);
        debug!(width = native_size.x, height = native_size.y, "Original loaded");
    }

    /// Replace the compressed preview. Offsets survive where they still fit.
    ///
    /// A first preview picks up the original's offsets, so whatever was
    /// scrolled before it arrived stays in view on both panes.
    pub fn set_compressed_content(&mut self, native_size: Vec2) {
        let first = !self.compressed.has_content();
        let before = self.compressed.scroll_offset();
        self.compressed.set_content(Some(native_size));

        if first && self.sync.target(Pane::Compressed) == Some(Pane::Original) {
            let seed = self.original.scroll_offset();
            for axis in Axis::BOTH {
                self.scroll(Pane::Compressed, axis, seed.get(axis));
            }
        }
        self.mirror_clamps(Pane::Compressed, before);
    }

    pub fn clear(&mut self) {
        self.scale_factor = 1.0;
        for pane in Pane::BOTH {
            let state = self.pane_mut(pane);
            state.set_content(None);
            state.set_scale_factor(1.0);
            state.reset_scroll();
        }
    }

    pub fn set_viewport_size(&mut self, pane: Pane, size: Vec2) {
        let before = self.pane(pane).scroll_offset();
        self.pane_mut(pane).set_viewport_size(size);
        self.mirror_clamps(pane, before);
    }

    /// Copy any bar value a relayout clamped on `pane` to its sync target.
    fn mirror_clamps(&mut self, pane: Pane, before: Vec2) {
        let Some(target) = self.sync.target(pane) else {
            return;
        };
        let after = self.pane(pane).scroll_offset();
        for axis in Axis::BOTH {
            if after.get(axis) != before.get(axis) {
                self.pane_mut(target).bar_mut(axis).set_value(after.get(axis));
            }
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(self.zoom.step_in)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(self.zoom.step_out)
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        match direction {
            ZoomDirection::In => self.zoom_in(),
            ZoomDirection::Out => self.zoom_out(),
        }
    }

    /// Multiply the scale by `factor`, keeping the viewport midpoint fixed.
    ///
    /// Returns `false` and changes nothing when no image is loaded or when the
    /// new scale would leave the configured bounds.
    pub fn zoom_by(&mut self, factor: f32) -> bool {
        if !self.has_content() || !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let new_scale = self.scale_factor * factor;
        if new_scale > self.zoom.max || new_scale < self.zoom.min {
            debug!(scale = self.scale_factor, factor, "Zoom rejected at bound");
            return false;
        }

        // Offsets from before the rescale; the new ranges may clamp them.
        let previous = Pane::BOTH.map(|pane| {
            Axis::BOTH.map(|axis| {
                let bar = self.pane(pane).bar(axis);
                (bar.value(), bar.page_step())
            })
        });

        self.apply_scale(new_scale);

        // Original first, then compressed. The compressed adjustment goes through
        // the synchronizer like any other scroll.
        for (pane, bars) in Pane::BOTH.into_iter().zip(previous) {
            for (axis, (value, page_step)) in Axis::BOTH.into_iter().zip(bars) {
                let anchored = value * factor + (factor - 1.0) * page_step / 2.0;
                match pane {
                    Pane::Original => {
                        self.original.bar_mut(axis).set_value(anchored);
                    }
                    Pane::Compressed => {
                        self.scroll(Pane::Compressed, axis, anchored);
                    }
                }
            }
        }

        debug!(scale = self.scale_factor, "Zoomed");
        true
    }

    /// Back to 1:1 with offsets at the origin.
    pub fn reset_zoom(&mut self) -> bool {
        if !self.has_content() {
            return false;
        }
        self.apply_scale(1.0);
        for pane in Pane::BOTH {
            self.pane_mut(pane).reset_scroll();
        }
        true
    }

    /// Largest scale at which the whole original fits its pane.
    pub fn fit_to_viewport(&mut self) -> bool {
        let Some(content) = self.original.content_size().filter(|c| c.is_positive()) else {
            return false;
        };
        let available = self.original.viewport_size();
        if !available.is_positive() {
            return false;
        }
        let fit = (available.x / content.x)
            .min(available.y / content.y)
            .clamp(self.zoom.min, self.zoom.max);
        self.apply_scale(fit);
        for pane in Pane::BOTH {
            self.pane_mut(pane).reset_scroll();
        }
        true
    }

    fn apply_scale(&mut self, scale: f32) {
        self.scale_factor = scale;
        self.original.set_scale_factor(scale);
        self.compressed.set_scale_factor(scale);
    }

    /// Set one bar of `pane` and mirror the result to the synchronized pane.
    ///
    /// Returns `true` if the source bar moved.
    pub fn scroll(&mut self, pane: Pane, axis: Axis, value: f32) -> bool {
        let changed = self.pane_mut(pane).bar_mut(axis).set_value(value);
        if changed {
            if let Some(target) = self.sync.target(pane) {
                let raw = self.pane(pane).bar(axis).value();
                self.pane_mut(target).bar_mut(axis).set_value(raw);
            }
        }
        changed
    }

    pub fn scroll_by(&mut self, pane: Pane, axis: Axis, delta: f32) -> bool {
        let current = self.pane(pane).bar(axis).value();
        self.scroll(pane, axis, current + delta)
    }

    pub fn set_scroll_offset(&mut self, pane: Pane, offset: Vec2) -> bool {
        let h = self.scroll(pane, Axis::Horizontal, offset.x);
        let v = self.scroll(pane, Axis::Vertical, offset.y);
        h || v
    }

    pub fn scroll_offset(&self, pane: Pane) -> Vec2 {
        self.pane(pane).scroll_offset()
    }

    /// Jump the compressed pane (and whatever it drives) to a fraction of its
    /// scrollable range.
    pub fn set_scroll_normalized(&mut self, axis: Axis, fraction: f32) -> bool {
        let bar = self.compressed.bar(axis);
        let fraction = fraction.clamp(0.0, 1.0);
        let value = bar.min() + (bar.max() - bar.min()) * fraction;
        self.scroll(Pane::Compressed, axis, value)
    }

    pub fn get_scroll_normalized(&self, axis: Axis) -> f32 {
        self.compressed.bar(axis).normalized()
    }

    /// Apply a dispatched wheel action to the pane under the pointer.
    pub fn apply_wheel(&mut self, pane: Pane, action: WheelAction) -> bool {
        match action {
            WheelAction::Scroll { axis, amount } => self.scroll_by(self.driver(pane), axis, amount),
            WheelAction::ZoomIn => self.zoom_in(),
            WheelAction::ZoomOut => self.zoom_out(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom_settings_are_valid() {
        assert!(ZoomSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zoom_settings_reject_inverted_steps() {
        let settings = ZoomSettings {
            step_in: 0.8,
            step_out: 1.25,
            ..ZoomSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_resets_scale_and_offsets() {
        let mut dual = DualViewport::default();
        dual.set_viewport_size(Pane::Original, Vec2::new(100.0, 100.0));
        dual.set_viewport_size(Pane::Compressed, Vec2::new(100.0, 100.0));
        dual.load_original(Vec2::new(400.0, 400.0));
        dual.set_compressed_content(Vec2::new(400.0, 400.0));
        dual.zoom_in();
        dual.scroll(Pane::Compressed, Axis::Vertical, 50.0);

        dual.load_original(Vec2::new(300.0, 300.0));
        assert_eq!(dual.scale_factor(), 1.0);
        assert_eq!(dual.scroll_offset(Pane::Original), Vec2::ZERO);
        assert!(!dual.compressed().has_content());
    }
}
