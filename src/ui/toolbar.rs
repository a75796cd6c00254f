//! Legend and zoom controls above the graph.

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::event::Action;
use crate::graph::NodeKind;
use crate::theme::{BUTTON_STYLE, MUTED_COLOR};

// ============================================================================
// Buttons
// ============================================================================

/// Clickable zoom controls, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    ZoomOut,
    ZoomIn,
    Reset,
}

impl ToolbarButton {
    pub const ALL: [Self; 3] = [Self::ZoomOut, Self::ZoomIn, Self::Reset];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ZoomOut => " - ",
            Self::ZoomIn => " + ",
            Self::Reset => " reset ",
        }
    }

    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::ZoomOut => Action::ZoomOut,
            Self::ZoomIn => Action::ZoomIn,
            Self::Reset => Action::ResetView,
        }
    }
}

/// Columns between buttons.
const BUTTON_GAP: u16 = 1;

/// Right-aligned button cells inside `area`.
#[must_use]
pub fn button_areas(area: Rect) -> Vec<(ToolbarButton, Rect)> {
    let total: u16 = ToolbarButton::ALL
        .iter()
        .map(|b| b.label().len() as u16)
        .sum::<u16>()
        + BUTTON_GAP * (ToolbarButton::ALL.len() as u16 - 1);
    if area.height == 0 || area.width < total + 1 {
        return Vec::new();
    }

    let mut x = area.right() - 1 - total;
    ToolbarButton::ALL
        .iter()
        .map(|button| {
            let width = button.label().len() as u16;
            let rect = Rect::new(x, area.y, width, 1);
            x += width + BUTTON_GAP;
            (*button, rect)
        })
        .collect()
}

/// The button under a cell, if any.
#[must_use]
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<ToolbarButton> {
    button_areas(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(button, _)| button)
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the legend on the left and the zoom controls on the right.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut legend = vec![Span::raw(" ")];
    for kind in [NodeKind::Focal { risk_score: 0 }, NodeKind::Account, NodeKind::Related] {
        let (_, stroke) = kind.palette();
        legend.push(Span::styled("● ", Style::default().fg(stroke)));
        legend.push(Span::raw(format!("{}  ", kind.legend_label())));
    }
    frame.render_widget(Paragraph::new(Line::from(legend)), area);

    let buttons = button_areas(area);
    if let Some((_, first)) = buttons.first() {
        let zoom = format!("zoom {:.0}% ", app.view.zoom() * 100.0);
        let width = (zoom.len() as u16).min(first.x.saturating_sub(area.x));
        let zoom_area = Rect::new(first.x - width, area.y, width, 1);
        frame.render_widget(
            Paragraph::new(zoom)
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Right),
            zoom_area,
        );
    }
    for (button, rect) in buttons {
        frame.render_widget(Paragraph::new(button.label()).style(BUTTON_STYLE), rect);
    }
}
