//! UI rendering for the entigraph TUI.
//!
//! # Module Structure
//!
//! - `layout` - Screen areas shared by rendering and mouse handling
//! - `header` - Entity profile header
//! - `toolbar` - Legend and zoom controls
//! - `footer` - Interaction hints and counts
//! - `helpers` - Shared block and number formatting helpers

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod toolbar;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::graph::{EntityGraph, EntityGraphWidget};
use crate::theme::{MUTED_COLOR, TITLE_STYLE, WARNING_COLOR};

use helpers::create_border_block;
use layout::{AppLayout, canvas_block};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Redraws the whole screen from `app`.
///
/// The graph is rebuilt from the mounted entity on every call, so the canvas
/// always reflects the current entity and view.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = AppLayout::new(frame.area());

    let Some(entity) = app.current_entity() else {
        render_placeholder(frame, frame.area(), app);
        return;
    };

    header::render(frame, layout.header, entity);
    toolbar::render(frame, layout.toolbar, app);

    let graph = EntityGraph::with_partition(entity, app.partition);
    let block = canvas_block().title(Span::styled(" Network ", TITLE_STYLE));
    frame.render_widget(
        EntityGraphWidget::new(&graph, &app.view).block(block),
        layout.canvas,
    );

    footer::render(
        frame,
        layout.footer,
        app,
        Some((graph.node_count(), graph.edge_count())),
    );
}

/// Shown when no entity is mounted.
fn render_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let message = match app.missing_entity() {
        Some(id) => format!("Entity '{id}' not found. Press n to browse the directory."),
        None if app.entity_count() == 0 => "The entity directory is empty.".to_string(),
        None => "No entity selected.".to_string(),
    };
    let color = if app.missing_entity().is_some() {
        WARNING_COLOR
    } else {
        MUTED_COLOR
    };

    let panel = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(create_border_block("Network"));
    frame.render_widget(panel, area);
}

// ============================================================================
// Tests
// ============================================================================
