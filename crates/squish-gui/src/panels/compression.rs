use crate::app::SquishApp;

pub fn show(ctx: &egui::Context, app: &mut SquishApp) {
    egui::TopBottomPanel::top("compression").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Compression:");
            if app.controls.show(ui) {
                tracing::debug!(quality = app.controls.value().get(), "Quality changed");
                app.request_compression();
            }
            ui.small("(1 = best quality, 31 = smallest file)");
            if app.ui_state.is_busy() {
                ui.spinner();
            }
        });
        ui.add_space(4.0);
    });
}
