use std::sync::mpsc;

use squish_core::compress::RequestTracker;
use squish_core::config::AppConfig;
use squish_core::view::Pane;

use crate::convert::image_size;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{QualityControls, UIState, ViewerState};
use crate::workers;

pub struct SquishApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewer: ViewerState,
    pub controls: QualityControls,
    pub tracker: RequestTracker,
    pub config: AppConfig,
    pub show_about: bool,
}

impl SquishApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        // Ctrl+wheel and Ctrl+/- belong to the image panes, not UI scaling.
        ctx.options_mut(|o| o.zoom_with_keyboard = false);

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(&config, result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewer: ViewerState::new(&config),
            controls: QualityControls::new(config.default_quality()),
            tracker: RequestTracker::default(),
            config,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    image,
                    size_bytes,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        image.size[0],
                        image.size[1]
                    ));
                    self.viewer.dual.load_original(image_size(&image));
                    let texture = ctx.load_texture("original", image, egui::TextureOptions::LINEAR);
                    self.viewer.set_texture(Pane::Original, Some(texture));
                    self.viewer.set_texture(Pane::Compressed, None);
                    self.viewer.end_pan();
                    self.ui_state.file_path = Some(path);
                    self.ui_state.input_size_bytes = Some(size_bytes);
                    self.ui_state.result = None;
                    self.request_compression();
                }
                WorkerResult::Compressed {
                    generation,
                    result,
                    image,
                } => {
                    if !self.tracker.is_current(generation) {
                        tracing::debug!(?generation, "Dropping stale compression result");
                        continue;
                    }
                    self.ui_state.in_flight = None;
                    self.viewer.dual.set_compressed_content(image_size(&image));
                    let texture =
                        ctx.load_texture("compressed", image, egui::TextureOptions::LINEAR);
                    self.viewer.set_texture(Pane::Compressed, Some(texture));
                    self.ui_state.result = Some(result);
                }
                WorkerResult::CompressFailed {
                    generation,
                    message,
                } => {
                    if !self.tracker.is_current(generation) {
                        continue;
                    }
                    self.ui_state.in_flight = None;
                    self.ui_state.notify("Encoding failed", message);
                }
                WorkerResult::CompressSkipped { generation } => {
                    if self.tracker.is_current(generation) {
                        self.ui_state.in_flight = None;
                    }
                    self.ui_state.add_log("No image loaded".into());
                }
                WorkerResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::SaveFailed { message } => {
                    self.ui_state.notify("Save failed", message);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Queue an encode at the current quality. Earlier requests become stale.
    pub fn request_compression(&mut self) {
        if self.ui_state.file_path.is_none() {
            return;
        }
        let generation = self.tracker.next();
        self.ui_state.in_flight = Some(generation);
        self.send_command(WorkerCommand::Compress {
            generation,
            quality: self.controls.value(),
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for SquishApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::compression::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewports::show(ctx, self);
        panels::notifications::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Squish")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Squish");
                        ui.label("Image Compression Preview");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.label(format!("Encoder: {}", self.config.encoder_program));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
