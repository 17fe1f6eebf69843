use ratatui::style::Color;

// Palette loosely follows the TMDB brand colors.
pub const ACCENT: Color = Color::Rgb(0x01, 0xb4, 0xe4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x0d, 0x25, 0x3f);
pub const HEADER_TEXT: Color = Color::Rgb(0xf0, 0xf4, 0xf8);
pub const MUTED_TEXT: Color = Color::Rgb(0x7a, 0x8b, 0x9c);
pub const POPUP_BORDER: Color = Color::Rgb(0x90, 0xce, 0xa1);
pub const RATING: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub const STATUS_ERROR: Color = Color::Rgb(0xe5, 0x48, 0x4d);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x03, 0x25, 0x41);
