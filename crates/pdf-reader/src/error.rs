use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("PDF library unavailable: {0}")]
    LibraryUnavailable(String),

    #[error("Invalid PDF file: {0}")]
    InvalidPdf(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("Page {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("Invalid page number: {0:?}")]
    InvalidPageNumber(String),

    #[error("Page image {width}x{height} exceeds the display limit of {max_side} pixels")]
    PageTooLarge {
        width: u32,
        height: u32,
        max_side: usize,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
