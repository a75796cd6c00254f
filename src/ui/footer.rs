//! Footer with interaction hints and graph counts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme::MUTED_COLOR;

pub const INTERACTION_HINT: &str = "Drag to pan • Scroll or +/- to zoom • 0 to reset";

/// Renders hints on the first row and counts plus navigation on the second.
pub fn render(frame: &mut Frame, area: Rect, app: &App, counts: Option<(usize, usize)>) {
    let summary = match counts {
        Some((nodes, edges)) => format!("Showing {nodes} nodes and {edges} relationships"),
        None => "No entity loaded".to_string(),
    };
    let nav = if app.entity_count() > 0 {
        format!(
            "Entity {}/{}  n/p:Switch  q:Quit",
            app.position(),
            app.entity_count()
        )
    } else {
        "q:Quit".to_string()
    };

    let footer = Paragraph::new(vec![
        Line::from(INTERACTION_HINT),
        Line::from(format!("{summary}  │  {nav}")),
    ])
    .style(Style::default().fg(MUTED_COLOR))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
