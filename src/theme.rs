//! Color palette definitions for the newsdeck TUI.
//!
//! One small, opinionated palette used by all rendering code, grouped into
//! background neutrals, text shades, and accents for semantic states such
//! as success, error, and sentiment badges.
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade, used as foreground on bright highlights.
    pub crust: Color,
    /// Border color for unfocused panes.
    pub surface1: Color,
    /// Foreground for rows hidden by the source filter.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for source tags and informational fragments.
    pub sapphire: Color,
    /// Accent for the focused pane border and title.
    pub mauve: Color,
    /// Success notices and positive sentiment.
    pub green: Color,
    /// In-flight indicators and neutral sentiment.
    pub yellow: Color,
    /// Error notices and negative sentiment.
    pub red: Color,
    /// Cursor-row highlight background.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
///
/// This is a small helper to keep the palette definition concise.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
///
/// Example
///
/// ```rust
/// use newsdeck::theme::theme;
/// let t = theme();
/// let primary_text = t.text;
/// ```
pub fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        mantle: hex((0x18, 0x18, 0x25)),
        crust: hex((0x11, 0x11, 0x1b)),
        surface1: hex((0x45, 0x47, 0x5a)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}
