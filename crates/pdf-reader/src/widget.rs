use crate::ui::viewer_panel::PdfReaderPanel;
use crate::viewer::controller::ViewerController;
use crate::viewer::pdf_loader::PdfiumOpener;
use eframe::egui;

pub struct PdfReaderWidget {
    controller: ViewerController<PdfiumOpener>,
    panel: PdfReaderPanel,
}

impl PdfReaderWidget {
    pub fn new() -> Self {
        Self {
            controller: ViewerController::new(PdfiumOpener::new()),
            panel: PdfReaderPanel::new(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.panel.show(ctx, &mut self.controller);
    }
}

impl Default for PdfReaderWidget {
    fn default() -> Self {
        Self::new()
    }
}
