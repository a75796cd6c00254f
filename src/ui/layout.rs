//! Layout calculations for the entigraph TUI.
//!
//! Rendering and mouse handling both derive their areas from
//! [`AppLayout::new`], so a click maps to the same cell that was drawn.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, TOOLBAR_HEIGHT};

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Entity profile header
    pub header: Rect,
    /// Legend and zoom controls
    pub toolbar: Rect,
    /// Graph panel including its border
    pub canvas: Rect,
    /// Drawable graph area inside the border
    pub canvas_inner: Rect,
    /// Hints and node/edge counts
    pub footer: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [header, toolbar, canvas, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        Self {
            header,
            toolbar,
            canvas,
            canvas_inner: canvas_block().inner(canvas),
            footer,
        }
    }
}

/// Border around the graph panel.
#[must_use]
pub fn canvas_block() -> Block<'static> {
    Block::bordered().border_style(crate::theme::BORDER_STYLE)
}
