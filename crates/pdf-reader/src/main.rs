use eframe::egui;
use pdf_reader::app::PdfReaderApp;
use pdf_reader::constants::*;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_position([DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y])
            .with_inner_size([DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(PdfReaderApp::new()))),
    );

    log::info!("Main loop exited");
    result
}
