use std::path::PathBuf;

/// User intents dispatched to [`super::controller::ViewerController`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    Load(PathBuf),
    NextPage,
    PreviousPage,
    /// Raw contents of the page-number field, one-based.
    JumpToPage(String),
    ZoomIn,
    ZoomOut,
}

impl ViewerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::JumpToPage(_) => "jump_to_page",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
        }
    }
}
