use squish_core::config::AppConfig;
use squish_core::view::{DualViewport, Pane, PanTracker, WheelDispatcher};

/// Everything the two image panes need between frames.
pub struct ViewerState {
    pub dual: DualViewport,
    pub pan: PanTracker,
    /// Pane whose bars the active pan drives.
    pub pan_target: Option<Pane>,
    pub wheel: WheelDispatcher,
    original_texture: Option<egui::TextureHandle>,
    compressed_texture: Option<egui::TextureHandle>,
}

impl ViewerState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dual: DualViewport::new(config.zoom, config.scroll_sync),
            pan: PanTracker::default(),
            pan_target: None,
            wheel: WheelDispatcher::default(),
            original_texture: None,
            compressed_texture: None,
        }
    }

    pub fn texture(&self, pane: Pane) -> Option<&egui::TextureHandle> {
        match pane {
            Pane::Original => self.original_texture.as_ref(),
            Pane::Compressed => self.compressed_texture.as_ref(),
        }
    }

    pub fn set_texture(&mut self, pane: Pane, texture: Option<egui::TextureHandle>) {
        match pane {
            Pane::Original => self.original_texture = texture,
            Pane::Compressed => self.compressed_texture = texture,
        }
    }

    pub fn end_pan(&mut self) {
        self.pan.cancel();
        self.pan_target = None;
    }
}
