use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const DESCRIPTION_TEXT: Color = Color::Rgb(0xb0, 0xb0, 0xb0);
pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0x3b, 0x30);
