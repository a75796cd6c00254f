//! Visual encoding of nodes, edges and labels.

use ratatui::style::Color;

use crate::constants::{LABEL_ELLIPSIS, LABEL_LINE_HEIGHT, LABEL_MAX_CHARS, NODE_OUTLINE_WIDTH};
use crate::theme;

use super::types::NodeKind;

// ============================================================================
// Styles
// ============================================================================

/// Line stroke parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub width: f64,
}

/// Filled, outlined circle parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Centered text parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Backdrop behind the glyphs, if any.
    pub background: Option<Color>,
    /// Nominal font size in pixels.
    pub size: u16,
    pub bold: bool,
}

// ============================================================================
// Edge Encoding
// ============================================================================

/// Edge opacity: `0.3` at strength 0 up to `0.8` at strength 1.
#[must_use]
pub fn edge_opacity(strength: f64) -> f64 {
    0.3 + 0.5 * strength
}

/// Edge stroke width: `1` at strength 0 up to `3` at strength 1.
#[must_use]
pub fn edge_width(strength: f64) -> f64 {
    1.0 + 2.0 * strength
}

#[must_use]
pub fn edge_stroke(strength: f64) -> Stroke {
    Stroke {
        color: theme::EDGE_COLOR,
        opacity: edge_opacity(strength),
        width: edge_width(strength),
    }
}

pub const EDGE_LABEL_STYLE: TextStyle = TextStyle {
    color: theme::CAPTION_COLOR,
    background: None,
    size: 10,
    bold: false,
};

pub const RISK_CAPTION_STYLE: TextStyle = EDGE_LABEL_STYLE;

// ============================================================================
// Node Encoding
// ============================================================================

#[must_use]
pub fn node_circle(kind: &NodeKind) -> CircleStyle {
    let (fill, stroke) = kind.palette();
    CircleStyle {
        fill,
        stroke,
        stroke_width: NODE_OUTLINE_WIDTH,
    }
}

/// Label style; text sits on the node fill so it stays readable on a dark
/// terminal background.
#[must_use]
pub fn node_label(kind: &NodeKind) -> TextStyle {
    let (fill, _) = kind.palette();
    match kind {
        NodeKind::Focal { .. } => TextStyle {
            color: theme::LABEL_COLOR,
            background: Some(fill),
            size: 12,
            bold: true,
        },
        NodeKind::Account | NodeKind::Related => TextStyle {
            color: theme::LABEL_COLOR,
            background: Some(fill),
            size: 11,
            bold: false,
        },
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Cuts a single line to [`LABEL_MAX_CHARS`] characters plus an ellipsis.
#[must_use]
pub fn truncate_label(line: &str) -> String {
    if line.chars().count() <= LABEL_MAX_CHARS {
        return line.to_string();
    }
    let head: String = line.chars().take(LABEL_MAX_CHARS).collect();
    format!("{head}{LABEL_ELLIPSIS}")
}

/// Splits a label on newlines and truncates each line.
#[must_use]
pub fn label_lines(label: &str) -> Vec<String> {
    label.split('\n').map(truncate_label).collect()
}

/// Vertical offset of line `idx` out of `count`, centering the block.
#[must_use]
pub fn line_offset(idx: usize, count: usize) -> f64 {
    (idx as f64 - count as f64 / 2.0 + 0.5) * LABEL_LINE_HEIGHT
}

// ============================================================================
// Tests
// ============================================================================
