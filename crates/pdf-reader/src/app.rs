use crate::widget::PdfReaderWidget;
use eframe::egui;

#[derive(Default)]
pub struct PdfReaderApp {
    widget: PdfReaderWidget,
}

impl PdfReaderApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl eframe::App for PdfReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.show(ctx);
    }
}
