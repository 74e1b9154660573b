use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x99, 0xf6, 0xe4);
pub const HOVER: Color = Color::Rgb(0xe8, 0x79, 0xf9);
pub const DISABLED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const BACKGROUND: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const LINK: Color = Color::Rgb(0xf0, 0xab, 0xfc);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x1e, 0x29, 0x3b);
