use super::{canvas, controls, error_window, shortcuts};
use crate::error::ViewerError;
use crate::viewer::command::ViewerCommand;
use crate::viewer::controller::{RenderedPage, ViewerController};
use crate::viewer::document::DocumentOpener;
use eframe::egui;

const PAGE_TEXTURE_NAME: &str = "pdf_page";

/// Display side of the reader. Holds only what the controller last produced;
/// all state changes go through [`ViewerController::dispatch`].
#[derive(Default)]
pub struct PdfReaderPanel {
    page_label: Option<String>,
    page_input: String,
    texture: Option<egui::TextureHandle>,
    last_error: Option<String>,
    pending_commands: Vec<ViewerCommand>,
}

impl PdfReaderPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show<O: DocumentOpener>(
        &mut self,
        ctx: &egui::Context,
        controller: &mut ViewerController<O>,
    ) {
        if let Some(command) = shortcuts::read_shortcuts(ctx) {
            self.pending_commands.push(command);
        }

        let page_info_visible = self.page_label.is_some();
        egui::TopBottomPanel::top("page_info").show_animated(ctx, page_info_visible, |ui| {
            if let Some(label) = &self.page_label
                && let Some(command) = controls::show_page_info(ui, label, &mut self.page_input)
            {
                self.pending_commands.push(command);
            }
        });

        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(command) = controls::show_navigation(ui) {
                self.pending_commands.push(command);
            }
            if let Some(command) = controls::show_load_button(ui) {
                self.pending_commands.push(command);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show_page(ui, self.texture.as_ref());
        });

        error_window::show_error(ctx, &mut self.last_error);

        let commands = std::mem::take(&mut self.pending_commands);
        for command in commands {
            self.apply(ctx, controller, command);
        }
    }

    pub fn apply<O: DocumentOpener>(
        &mut self,
        ctx: &egui::Context,
        controller: &mut ViewerController<O>,
        command: ViewerCommand,
    ) {
        let name = command.name();
        controller.set_max_texture_side(ctx.input(|i| i.max_texture_side));
        match controller.dispatch(command) {
            Ok(Some(page)) => self.present(ctx, &page),
            Ok(None) => log::debug!("{} left the view unchanged", name),
            Err(e) => {
                log::warn!("{} failed: {}", name, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Keeps the previous image when the new one is too large to upload, which
    /// can happen when moving to a bigger page at a high zoom.
    fn present(&mut self, ctx: &egui::Context, page: &RenderedPage) {
        let max_side = ctx.input(|i| i.max_texture_side);
        let (width, height) = (page.pixmap.width(), page.pixmap.height());
        if width as usize > max_side || height as usize > max_side {
            let error = ViewerError::PageTooLarge {
                width,
                height,
                max_side,
            };
            log::warn!("Not showing page {}: {}", page.page_index + 1, error);
            self.last_error = Some(error.to_string());
            return;
        }

        let image = page.pixmap.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                let texture =
                    ctx.load_texture(PAGE_TEXTURE_NAME, image, egui::TextureOptions::LINEAR);
                self.texture = Some(texture);
            }
        }

        self.page_label = Some(page.label());
        self.page_input = page.page_number_text();
        ctx.request_repaint();
    }

    pub fn page_label(&self) -> Option<&str> {
        self.page_label.as_deref()
    }

    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_page_image(&self) -> bool {
        self.texture.is_some()
    }

    pub fn page_image_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(egui::TextureHandle::size)
    }
}
