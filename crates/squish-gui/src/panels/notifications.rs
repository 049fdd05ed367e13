use crate::app::SquishApp;

/// One window per pending error; "Dismiss" removes it.
pub fn show(ctx: &egui::Context, app: &mut SquishApp) {
    let mut dismissed = None;

    for (index, note) in app.ui_state.notifications.iter().enumerate() {
        egui::Window::new(note.title.as_str())
            .id(egui::Id::new(("notification", index)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, index as f32 * 24.0])
            .show(ctx, |ui| {
                ui.label(note.message.as_str());
                ui.add_space(8.0);
                if ui.button("Dismiss").clicked() {
                    dismissed = Some(index);
                }
            });
    }

    if let Some(index) = dismissed {
        app.ui_state.dismiss(index);
    }
}
