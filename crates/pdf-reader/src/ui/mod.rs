pub mod canvas;
pub mod controls;
pub mod error_window;
pub mod shortcuts;
pub mod style;
pub mod viewer_panel;
