pub mod command;
pub mod controller;
pub mod document;
pub mod pdf_loader;
pub mod pixmap;
pub mod state;
