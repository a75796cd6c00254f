//! Paint pass for entity graphs.
//!
//! A frame is: clear, save, translate by the pan offset, scale by the zoom
//! factor, every edge, every node, restore. Painting holds no state, so two
//! calls with the same graph and view issue the same calls.

use crate::constants::{EDGE_LABEL_OFFSET, RISK_CAPTION_OFFSET};

use super::layout::EntityGraph;
use super::style::{self, EDGE_LABEL_STYLE, RISK_CAPTION_STYLE};
use super::surface::Surface;
use super::types::{Node, NodeKind, Point};
use super::view::ViewState;

/// Paints `graph` onto `surface` under the transform of `view`.
pub fn paint<S: Surface + ?Sized>(graph: &EntityGraph, view: &ViewState, surface: &mut S) {
    surface.clear();
    surface.save();
    surface.translate(view.pan().x, view.pan().y);
    surface.scale(view.zoom());

    paint_edges(graph, surface);
    for node in &graph.nodes {
        paint_node(node, surface);
    }

    surface.restore();
}

/// Edges with an unresolved endpoint are skipped.
fn paint_edges<S: Surface + ?Sized>(graph: &EntityGraph, surface: &mut S) {
    for (edge, from, to) in graph.resolved_edges() {
        surface.stroke_line(from.position, to.position, style::edge_stroke(edge.strength));

        let mid = from.position.midpoint(to.position);
        surface.fill_text(
            Point::new(mid.x, mid.y - EDGE_LABEL_OFFSET),
            &edge.label,
            EDGE_LABEL_STYLE,
        );
    }
}

fn paint_node<S: Surface + ?Sized>(node: &Node, surface: &mut S) {
    let radius = node.kind.radius();
    surface.draw_circle(node.position, radius, style::node_circle(&node.kind));

    let text_style = style::node_label(&node.kind);
    let lines = style::label_lines(&node.label);
    let count = lines.len();
    for (idx, line) in lines.iter().enumerate() {
        let at = Point::new(
            node.position.x,
            node.position.y + style::line_offset(idx, count),
        );
        surface.fill_text(at, line, text_style);
    }

    match node.kind {
        NodeKind::Focal { risk_score } => {
            let at = Point::new(
                node.position.x,
                node.position.y + radius + RISK_CAPTION_OFFSET,
            );
            surface.fill_text(at, &format!("Risk: {risk_score}"), RISK_CAPTION_STYLE);
        }
        NodeKind::Account | NodeKind::Related => {}
    }
}
