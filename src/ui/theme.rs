use ratatui::style::Color;

pub const C_BG: Color = Color::Rgb(15, 20, 28);
pub const C_PANEL: Color = Color::Rgb(28, 38, 52);
pub const C_MUTED: Color = Color::Rgb(130, 144, 164);
pub const C_TEXT: Color = Color::Rgb(226, 234, 244);
pub const C_PRIMARY: Color = Color::Rgb(111, 201, 255);
pub const C_SUCCESS: Color = Color::Rgb(112, 220, 142);
pub const C_WARNING: Color = Color::Rgb(255, 210, 110);
