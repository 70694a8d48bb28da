use super::style::with_button_style;
use crate::constants::PAGE_INPUT_WIDTH;
use crate::viewer::command::ViewerCommand;
use eframe::egui;
use std::path::PathBuf;

pub fn pick_pdf_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open PDF")
        .add_filter("PDF Files", &["pdf"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

/// "Page N of M" on the left, the page-number field on the right.
pub fn show_page_info(
    ui: &mut egui::Ui,
    label: &str,
    page_input: &mut String,
) -> Option<ViewerCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let response =
                ui.add(egui::TextEdit::singleline(page_input).desired_width(PAGE_INPUT_WIDTH));
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                command = Some(ViewerCommand::JumpToPage(page_input.clone()));
            }
        });
    });

    command
}

pub fn show_navigation(ui: &mut egui::Ui) -> Option<ViewerCommand> {
    let mut command = None;

    with_button_style(ui, |ui| {
        ui.columns(2, |columns| {
            let previous = egui::Button::new("Previous Page")
                .min_size(egui::vec2(columns[0].available_width(), 0.0));
            if columns[0].add(previous).clicked() {
                command = Some(ViewerCommand::PreviousPage);
            }

            let next = egui::Button::new("Next Page")
                .min_size(egui::vec2(columns[1].available_width(), 0.0));
            if columns[1].add(next).clicked() {
                command = Some(ViewerCommand::NextPage);
            }
        });
    });

    command
}

/// Full-width load button. Cancelling the picker yields no command.
pub fn show_load_button(ui: &mut egui::Ui) -> Option<ViewerCommand> {
    let clicked = with_button_style(ui, |ui| {
        let button =
            egui::Button::new("Load PDF").min_size(egui::vec2(ui.available_width(), 0.0));
        ui.add(button).clicked()
    });

    if !clicked {
        return None;
    }

    match pick_pdf_file() {
        Some(path) => Some(ViewerCommand::Load(path)),
        None => {
            log::debug!("File dialog cancelled");
            None
        }
    }
}
