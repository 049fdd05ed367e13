use squish_core::consts::IMAGE_EXTENSIONS;
use squish_core::export::DragPayload;
use squish_core::view::{SyncMode, ZoomDirection};

use crate::app::SquishApp;
use crate::messages::WorkerCommand;

const OPEN: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
const ZOOM_IN: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Plus);
const ZOOM_IN_ALT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Equals);
const ZOOM_OUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Minus);
const RESET_ZOOM: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Num0);

pub fn show(ctx: &egui::Context, app: &mut SquishApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let has_output = app.ui_state.result.is_some();
                if ui
                    .add_enabled(has_output, egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&SAVE)))
                    .clicked()
                {
                    ui.close();
                    save_file(app);
                }

                ui.separator();

                if ui.add_enabled(has_output, egui::Button::new("Copy Image")).clicked() {
                    ui.close();
                    copy_image(app);
                }

                if ui.add_enabled(has_output, egui::Button::new("Copy File URI")).clicked() {
                    ui.close();
                    copy_file_uri(ctx, app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.add(egui::Button::new("Zoom In").shortcut_text(ctx.format_shortcut(&ZOOM_IN))).clicked() {
                    ui.close();
                    zoom(app, ZoomDirection::In);
                }
                if ui.add(egui::Button::new("Zoom Out").shortcut_text(ctx.format_shortcut(&ZOOM_OUT))).clicked() {
                    ui.close();
                    zoom(app, ZoomDirection::Out);
                }
                if ui.add(egui::Button::new("Reset Zoom").shortcut_text(ctx.format_shortcut(&RESET_ZOOM))).clicked() {
                    ui.close();
                    app.viewer.dual.reset_zoom();
                }
                if ui.button("Fit to Window").clicked() {
                    ui.close();
                    app.viewer.dual.fit_to_viewport();
                }

                ui.separator();

                ui.menu_button("Scroll Sync", |ui| {
                    let current = app.viewer.dual.sync_mode();
                    for mode in [
                        SyncMode::CompressedToOriginal,
                        SyncMode::Bidirectional,
                        SyncMode::Independent,
                    ] {
                        if ui.radio(current == mode, mode.to_string()).clicked() {
                            ui.close();
                            app.viewer.dual.set_sync_mode(mode);
                            app.ui_state.add_log(format!("Scroll sync: {mode}"));
                        }
                    }
                });
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ZOOM_IN) || i.consume_shortcut(&ZOOM_IN_ALT)) {
            zoom(app, ZoomDirection::In);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ZOOM_OUT)) {
            zoom(app, ZoomDirection::Out);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&RESET_ZOOM)) {
            app.viewer.dual.reset_zoom();
        }
    });
}

fn zoom(app: &mut SquishApp, direction: ZoomDirection) {
    if !app.viewer.dual.zoom(direction) {
        tracing::debug!(?direction, scale = app.viewer.dual.scale_factor(), "Zoom ignored");
    }
}

fn open_file(app: &mut SquishApp) {
    let cmd_tx = app.cmd_tx.clone();
    let start_dir = app.config.load_folder.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open Image")
            .set_directory(start_dir)
            .add_filter("Image Files", IMAGE_EXTENSIONS)
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

fn save_file(app: &mut SquishApp) {
    let Some(source) = app.ui_state.output_path() else {
        app.ui_state.add_log("Nothing to save".into());
        return;
    };
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let start_dir = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| app.config.load_folder.clone());

    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        let destination = rfd::FileDialog::new()
            .set_title("Save Image")
            .set_directory(start_dir)
            .set_file_name(file_name)
            .add_filter("JPEG", &["jpg", "jpeg"])
            .save_file();
        let _ = cmd_tx.send(WorkerCommand::Save {
            source,
            destination,
        });
    });
}

fn copy_image(app: &mut SquishApp) {
    match app.ui_state.output_path() {
        Some(path) => app.send_command(WorkerCommand::CopyToClipboard { path }),
        None => app.ui_state.add_log("Nothing to copy".into()),
    }
}

fn copy_file_uri(ctx: &egui::Context, app: &mut SquishApp) {
    let Some(path) = app.ui_state.output_path() else {
        app.ui_state.add_log("Nothing to copy".into());
        return;
    };
    match DragPayload::for_file(&path) {
        Ok(payload) => {
            ctx.copy_text(payload.uri.clone());
            app.ui_state
                .add_log(format!("Copied {} ({})", payload.uri, payload.mime));
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
    }
}
