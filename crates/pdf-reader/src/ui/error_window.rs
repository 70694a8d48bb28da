use eframe::egui;

/// Modal-style window for open and render failures. Cleared by OK, Enter or Escape.
pub fn show_error(ctx: &egui::Context, error: &mut Option<String>) {
    let Some(message) = error.as_deref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            let ok_clicked = ui.button("OK").clicked();
            let key_pressed = ui.input(|i| {
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)
            });
            dismissed = ok_clicked || key_pressed;
        });

    if dismissed {
        *error = None;
    }
}
