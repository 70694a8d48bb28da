use super::pixmap::Pixmap;
use crate::error::Result;
use std::path::Path;

/// An opened document that can rasterise its pages.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Size of page `index` in pixels at zoom 1.0.
    fn page_size(&self, index: usize) -> Result<(f32, f32)>;

    /// Renders page `index` with both dimensions scaled by `zoom`.
    fn render_page(&self, index: usize, zoom: f32) -> Result<Pixmap>;
}

/// Opens documents from disk. Implemented by the PDFium backend and by test fakes.
pub trait DocumentOpener {
    type Document: PageSource;

    fn open(&mut self, path: &Path) -> Result<Self::Document>;
}
