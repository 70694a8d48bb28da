use egui::Color32;

pub const WINDOW_TITLE: &str = "PDF Reader/Annotator";

pub const DEFAULT_WINDOW_X: f32 = 100.0;
pub const DEFAULT_WINDOW_Y: f32 = 100.0;
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

pub const DEFAULT_ZOOM: f32 = 1.0;
pub const ZOOM_STEP: f32 = 1.2;

pub const PAGE_INPUT_WIDTH: f32 = 50.0;

pub const BUTTON_COLOR: Color32 = Color32::from_rgb(0x00, 0x78, 0xd4);
pub const BUTTON_HOVER_COLOR: Color32 = Color32::from_rgb(0x00, 0x5a, 0x9e);
pub const BUTTON_TEXT_COLOR: Color32 = Color32::WHITE;
pub const BUTTON_PADDING_X: f32 = 20.0;
pub const BUTTON_PADDING_Y: f32 = 10.0;
pub const BUTTON_CORNER_RADIUS: u8 = 5;

pub const PAGE_AREA_BACKGROUND: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const PAGE_AREA_BORDER: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const PAGE_AREA_BORDER_WIDTH: f32 = 1.0;
