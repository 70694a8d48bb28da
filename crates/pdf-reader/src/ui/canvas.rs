use super::style::page_area_frame;
use eframe::egui;

pub fn show_page(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
    page_area_frame().show(ui, |ui| {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| match texture {
                Some(texture) => show_centered_image(ui, texture),
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(100.0);
                        ui.weak("Load a PDF file to view");
                    });
                }
            });
    });
}

/// Pads the image into the middle of the viewport until it outgrows it, at
/// which point the scroll area takes over.
fn show_centered_image(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    let image_size = texture.size_vec2();
    let padding = ((ui.available_size() - image_size) * 0.5).max(egui::Vec2::ZERO);

    ui.add_space(padding.y);
    ui.horizontal(|ui| {
        ui.add_space(padding.x);
        ui.add(egui::Image::new(texture).fit_to_exact_size(image_size));
    });
    ui.add_space(padding.y);
}
