//! Color palette.
//!
//! Named terminal colors only, so the UI follows the user's terminal scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const POPUP_BG: Color = Color::DarkGray;
pub const INPUT_BG: Color = Color::Rgb(40, 40, 50);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_background_is_rgb() {
        assert!(matches!(INPUT_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_accent_matches_active_border() {
        assert_eq!(ACCENT, BORDER_ACTIVE);
    }
}
