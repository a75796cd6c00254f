//! Theme and styling constants for the entigraph TUI.
//!
//! Node palettes follow the investigation console's light palette; chrome uses
//! a Tokyo Night-inspired dark background so the pale node fills stay legible.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Chrome Colors
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Tokyo Night background color.
pub const BG_COLOR: Color = Color::Rgb(26, 27, 38);

// ============================================================================
// Graph Palette
// ============================================================================

/// Base edge color before opacity is applied.
pub const EDGE_COLOR: Color = Color::Rgb(100, 116, 139);

/// Edge label and risk caption color.
pub const CAPTION_COLOR: Color = Color::Rgb(100, 116, 139);

/// Node label text color.
pub const LABEL_COLOR: Color = Color::Rgb(30, 41, 59);

/// Focal entity with ordinary risk.
pub const ENTITY_FILL: Color = Color::Rgb(219, 234, 254);
pub const ENTITY_STROKE: Color = Color::Rgb(59, 130, 246);

/// Focal entity above the high-risk threshold.
pub const HIGH_RISK_FILL: Color = Color::Rgb(254, 226, 226);
pub const HIGH_RISK_STROKE: Color = Color::Rgb(239, 68, 68);

/// Owned accounts.
pub const ACCOUNT_FILL: Color = Color::Rgb(240, 253, 244);
pub const ACCOUNT_STROKE: Color = Color::Rgb(34, 197, 94);

/// Related entities.
pub const RELATED_FILL: Color = Color::Rgb(254, 243, 199);
pub const RELATED_STROKE: Color = Color::Rgb(245, 158, 11);

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title style for panel headers.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for toolbar buttons.
pub const BUTTON_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

/// Linear blend of `fg` over `bg` at the given opacity.
///
/// Terminal cells have no alpha channel, so translucent strokes are emulated
/// by mixing toward the canvas background. Non-RGB colors are returned as is.
#[must_use]
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let alpha = opacity.clamp(0.0, 1.0);
            let mix = |f: u8, b: u8| -> u8 {
                (f64::from(b) + (f64::from(f) - f64::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::opaque(1.0, Color::Rgb(200, 100, 50))]
    #[case::transparent(0.0, Color::Rgb(0, 0, 0))]
    #[case::half(0.5, Color::Rgb(100, 50, 25))]
    fn test_blend_rgb(#[case] opacity: f64, #[case] expected: Color) {
        let blended = blend(Color::Rgb(200, 100, 50), Color::Rgb(0, 0, 0), opacity);
        assert_eq!(blended, expected);
    }

    #[test]
    fn test_blend_named_color_passthrough() {
        assert_eq!(blend(Color::Red, BG_COLOR, 0.3), Color::Red);
    }
}
