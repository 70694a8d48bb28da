pub mod app;
pub mod constants;
pub mod error;
pub mod ui;
pub mod viewer;
pub mod widget;

pub use error::{Result, ViewerError};
pub use viewer::command::ViewerCommand;
pub use viewer::controller::{RenderedPage, ViewerController};
pub use viewer::document::{DocumentOpener, PageSource};
pub use viewer::pdf_loader::{PdfiumDocument, PdfiumOpener};
pub use viewer::pixmap::Pixmap;
pub use viewer::state::{PageNumber, ViewerState};
pub use widget::PdfReaderWidget;
