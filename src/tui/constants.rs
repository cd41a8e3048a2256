//! UI constants, kept in one place instead of scattered magic numbers.

/// Display truncation length for original URLs in the list.
pub const URL_TRUNCATE_LENGTH: usize = 40;

/// Popup dimension configuration.
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// Width percentage (0-100).
    pub width: u16,
    /// Height percentage (0-100).
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-popup dimensions.
pub mod popup {
    use super::PopupSize;

    pub const HELP: PopupSize = PopupSize::new(70, 80);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// Color theme.
pub mod colors {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
