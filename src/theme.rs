// Colour palettes for the TUI
//
// Two fixed palettes, light and dark. The active one is picked from the
// dark-mode flag on every frame, so toggling never needs a restart.

use crate::catalogue::DarkMode;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved palette ready for use in the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // ─── Panel Identity Colors ───────────────────────────────
    pub panel_cards: Color,
    pub panel_docs: Color,
    pub panel_logs: Color,

    // ─── Widget Colors ───────────────────────────────────────
    pub primary: Color,
    pub secondary: Color,
    pub destructive: Color,
    pub success: Color,
    pub warning: Color,
    pub code_block: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    pub border_type: BorderType,
}

/// Relative luminance (0.0 = black, 1.0 = white)
fn luminance(color: Color) -> f32 {
    match color {
        Color::Rgb(r, g, b) => {
            let r = r as f32 / 255.0;
            let g = g as f32 / 255.0;
            let b = b as f32 / 255.0;
            0.2126 * r + 0.7152 * g + 0.0722 * b
        }
        Color::Black => 0.0,
        Color::White | Color::Gray => 0.75,
        Color::DarkGray => 0.25,
        _ => 0.5,
    }
}

/// Readable text colour on top of `bg`
pub fn contrast_fg(bg: Color) -> Color {
    if luminance(bg) > 0.5 {
        Color::Rgb(0x11, 0x18, 0x27)
    } else {
        Color::Rgb(0xf9, 0xfa, 0xfb)
    }
}

impl Theme {
    pub fn light() -> Self {
        let selection = Color::Rgb(0x25, 0x63, 0xeb); // blue-600
        Self {
            name: "light",
            background: Color::Rgb(0xf9, 0xfa, 0xfb), // gray-50
            foreground: Color::Rgb(0x11, 0x18, 0x27), // gray-900
            muted: Color::Rgb(0x6b, 0x72, 0x80),      // gray-500
            title: Color::Rgb(0x11, 0x18, 0x27),
            border: Color::Rgb(0xd1, 0xd5, 0xdb), // gray-300
            highlight: Color::Rgb(0x3b, 0x82, 0xf6), // blue-500
            status_bar: Color::Rgb(0x37, 0x41, 0x51),
            panel_cards: Color::Rgb(0x3b, 0x82, 0xf6),
            panel_docs: Color::Rgb(0x7c, 0x3a, 0xed), // violet-600
            panel_logs: Color::Rgb(0x6b, 0x72, 0x80),
            primary: Color::Rgb(0x18, 0x18, 0x1b),
            secondary: Color::Rgb(0xe5, 0xe7, 0xeb),
            destructive: Color::Rgb(0xdc, 0x26, 0x26),
            success: Color::Rgb(0x16, 0xa3, 0x4a),
            warning: Color::Rgb(0xca, 0x8a, 0x04),
            code_block: Color::Rgb(0x1f, 0x29, 0x37),
            selection,
            selection_fg: contrast_fg(selection),
            border_type: BorderType::Rounded,
        }
    }

    pub fn dark() -> Self {
        let selection = Color::Rgb(0x3b, 0x82, 0xf6);
        Self {
            name: "dark",
            background: Color::Rgb(0x11, 0x18, 0x27), // gray-900
            foreground: Color::Rgb(0xf3, 0xf4, 0xf6), // gray-100
            muted: Color::Rgb(0x9c, 0xa3, 0xaf),      // gray-400
            title: Color::Rgb(0xf9, 0xfa, 0xfb),
            border: Color::Rgb(0x37, 0x41, 0x51), // gray-700
            highlight: Color::Rgb(0x60, 0xa5, 0xfa), // blue-400
            status_bar: Color::Rgb(0xd1, 0xd5, 0xdb),
            panel_cards: Color::Rgb(0x60, 0xa5, 0xfa),
            panel_docs: Color::Rgb(0xa7, 0x8b, 0xfa), // violet-400
            panel_logs: Color::Rgb(0x6b, 0x72, 0x80),
            primary: Color::Rgb(0xfa, 0xfa, 0xfa),
            secondary: Color::Rgb(0x37, 0x41, 0x51),
            destructive: Color::Rgb(0xef, 0x44, 0x44),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            warning: Color::Rgb(0xfa, 0xcc, 0x15),
            code_block: Color::Black,
            selection,
            selection_fg: contrast_fg(selection),
            border_type: BorderType::Rounded,
        }
    }

    /// Palette for the current value of the flag
    pub fn for_mode(mode: &DarkMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Text colour on a code block (always dark background)
    pub fn code_fg(&self) -> Color {
        contrast_fg(self.code_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_dark_mode_flag() {
        let mode = DarkMode::default();
        assert_eq!(Theme::for_mode(&mode).name, "light");
        mode.toggle();
        assert_eq!(Theme::for_mode(&mode).name, "dark");
    }

    #[test]
    fn contrast_picks_opposite_end() {
        assert_eq!(contrast_fg(Color::Rgb(0xff, 0xff, 0xff)), Color::Rgb(0x11, 0x18, 0x27));
        assert_eq!(contrast_fg(Color::Black), Color::Rgb(0xf9, 0xfa, 0xfb));
    }

    #[test]
    fn code_blocks_are_light_on_dark_in_both_modes() {
        for theme in [Theme::light(), Theme::dark()] {
            assert!(luminance(theme.code_fg()) > luminance(theme.code_block));
        }
    }
}
