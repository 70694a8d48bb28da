use crate::constants::*;
use eframe::egui;

/// Blue filled buttons with white text, darker on hover.
pub fn apply_button_style(style: &mut egui::Style) {
    let widgets = &mut style.visuals.widgets;
    for (visuals, fill) in [
        (&mut widgets.inactive, BUTTON_COLOR),
        (&mut widgets.hovered, BUTTON_HOVER_COLOR),
        (&mut widgets.active, BUTTON_HOVER_COLOR),
    ] {
        visuals.weak_bg_fill = fill;
        visuals.bg_fill = fill;
        visuals.bg_stroke = egui::Stroke::NONE;
        visuals.fg_stroke.color = BUTTON_TEXT_COLOR;
        visuals.corner_radius = egui::CornerRadius::same(BUTTON_CORNER_RADIUS);
        visuals.expansion = 0.0;
    }
    style.spacing.button_padding = egui::vec2(BUTTON_PADDING_X, BUTTON_PADDING_Y);
}

pub fn with_button_style<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.scope(|ui| {
        apply_button_style(ui.style_mut());
        add_contents(ui)
    })
    .inner
}

pub fn page_area_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(PAGE_AREA_BACKGROUND)
        .stroke(egui::Stroke::new(PAGE_AREA_BORDER_WIDTH, PAGE_AREA_BORDER))
}
