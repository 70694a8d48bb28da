use super::document::{DocumentOpener, PageSource};
use super::pixmap::Pixmap;
use crate::error::{Result, ViewerError};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

fn bind_pdfium() -> Result<Pdfium> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf));

    let candidates = exe_dir
        .into_iter()
        .chain(std::iter::once(PathBuf::from("./")));

    for dir in candidates {
        let library_path = Pdfium::pdfium_platform_library_name_at_path(&dir);
        match Pdfium::bind_to_library(&library_path) {
            Ok(bindings) => {
                log::info!("Bound PDFium from {}", library_path.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => log::debug!("No PDFium at {}: {}", library_path.display(), e),
        }
    }

    let bindings = Pdfium::bind_to_system_library().map_err(|e| {
        ViewerError::LibraryUnavailable(format!(
            "PDFium not found next to the executable, in the working directory or on the system: {}",
            e
        ))
    })?;
    log::info!("Bound system PDFium library");
    Ok(Pdfium::new(bindings))
}

/// Opens PDFs through PDFium. The library is bound on first use and kept for
/// the rest of the process, so documents can borrow it for `'static`.
#[derive(Default)]
pub struct PdfiumOpener {
    pdfium: Option<&'static Pdfium>,
}

impl std::fmt::Debug for PdfiumOpener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumOpener")
            .field("bound", &self.pdfium.is_some())
            .finish()
    }
}

impl PdfiumOpener {
    pub fn new() -> Self {
        Self::default()
    }

    fn pdfium(&mut self) -> Result<&'static Pdfium> {
        if let Some(pdfium) = self.pdfium {
            return Ok(pdfium);
        }
        let pdfium: &'static Pdfium = Box::leak(Box::new(bind_pdfium()?));
        self.pdfium = Some(pdfium);
        Ok(pdfium)
    }
}

impl DocumentOpener for PdfiumOpener {
    type Document = PdfiumDocument;

    fn open(&mut self, path: &Path) -> Result<PdfiumDocument> {
        if !path.exists() {
            return Err(ViewerError::FileNotFound(path.to_path_buf()));
        }

        let pdfium = self.pdfium()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ViewerError::InvalidPdf(format!("{}: {}", path.display(), e)))?;
        let page_count = usize::from(document.pages().len());

        Ok(PdfiumDocument {
            file_path: path.to_path_buf(),
            page_count,
            document,
        })
    }
}

/// A loaded PDF. Dropping it closes the underlying PDFium document.
pub struct PdfiumDocument {
    file_path: PathBuf,
    page_count: usize,
    document: PdfDocument<'static>,
}

impl std::fmt::Debug for PdfiumDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumDocument")
            .field("file_path", &self.file_path)
            .field("page_count", &self.page_count)
            .finish()
    }
}

impl PdfiumDocument {
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn page(&self, index: usize) -> Result<PdfPage<'static>> {
        let out_of_range = || ViewerError::PageOutOfRange {
            index,
            page_count: self.page_count,
        };
        let page_index = PdfPageIndex::try_from(index).map_err(|_| out_of_range())?;
        self.document
            .pages()
            .get(page_index)
            .map_err(|_| out_of_range())
    }
}

impl PageSource for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    /// PDFium renders one pixel per point at zoom 1.0.
    fn page_size(&self, index: usize) -> Result<(f32, f32)> {
        let page = self.page(index)?;
        Ok((page.width().value, page.height().value))
    }

    fn render_page(&self, index: usize, zoom: f32) -> Result<Pixmap> {
        let page = self.page(index)?;

        let config = PdfRenderConfig::new().scale_page_by_factor(zoom);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| ViewerError::RenderFailed(format!("page {}: {}", index + 1, e)))?;

        let width = u32::try_from(bitmap.width())
            .map_err(|_| ViewerError::RenderFailed("negative bitmap width".into()))?;
        let height = u32::try_from(bitmap.height())
            .map_err(|_| ViewerError::RenderFailed("negative bitmap height".into()))?;

        Pixmap::from_rgba(width, height, bitmap.as_rgba_bytes())
    }
}
