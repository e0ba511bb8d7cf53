use ratatui::style::Color;

// Warm cream-and-orange palette carried across every screen.
pub const CREAM_BG: Color = Color::Rgb(0xff, 0xf2, 0xe0);
pub const INK: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCENT_ORANGE: Color = Color::Rgb(0xf0, 0x8a, 0x24);
pub const STAR_GOLD: Color = Color::Rgb(0xe8, 0xa8, 0x20);
pub const ERROR_RED: Color = Color::Rgb(0xd8, 0x3a, 0x3a);
pub const SELECTED_BG: Color = Color::Rgb(0xff, 0xe0, 0xbd);
pub const FIELD_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
