use squish_core::format::format_file_size;

use crate::app::SquishApp;

pub fn show(ctx: &egui::Context, app: &mut SquishApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref path) = app.ui_state.file_path {
                ui.label(path.display().to_string());
                ui.separator();
            }
            if let Some(bytes) = app.ui_state.input_size_bytes {
                ui.label(format!("Original {}", format_file_size(bytes)));
                ui.separator();
            }
            if let Some(ref result) = app.ui_state.result {
                ui.label(format!("Compressed {}", result.size_label()));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewer.dual.scale_factor() * 100.0));
            ui.separator();
            ui.label(format!("Quality: {}", app.controls.value()));
            if app.ui_state.is_busy() {
                ui.separator();
                ui.label("Compressing...");
            }
        });

        ui.add_space(2.0);
    });
}
