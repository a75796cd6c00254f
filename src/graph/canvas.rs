//! Terminal canvas backend for the graph renderer.
//!
//! The 800×600 layout space is stretched over the widget's inner area using a
//! braille [`Canvas`]. Terminals have no alpha or stroke width, so opacity is
//! blended against the background and wide strokes become parallel strands
//! one dot apart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Block, Widget,
        canvas::{Canvas, Circle, Context, Line},
    },
};

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::theme::{self, BG_COLOR};

use super::layout::EntityGraph;
use super::renderer;
use super::style::{CircleStyle, Stroke, TextStyle};
use super::surface::{Surface, TransformStack};
use super::types::Point;
use super::view::ViewState;

/// Upper bound on strands drawn for one stroke.
const MAX_STRANDS: usize = 4;

// ============================================================================
// CanvasGeometry
// ============================================================================

/// Maps terminal cells inside the canvas area to layout-space points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub area: Rect,
}

impl CanvasGeometry {
    #[must_use]
    pub const fn new(area: Rect) -> Self {
        Self { area }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Layout units per terminal column.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        SURFACE_WIDTH / f64::from(self.area.width.max(1))
    }

    /// Layout units per terminal row.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        SURFACE_HEIGHT / f64::from(self.area.height.max(1))
    }

    /// Horizontal braille dot pitch in layout units.
    #[must_use]
    pub fn dot_size(&self) -> f64 {
        self.cell_width() / 2.0
    }

    /// Layout-space point at the center of a cell, `None` outside the canvas.
    #[must_use]
    pub fn to_surface(&self, column: u16, row: u16) -> Option<Point> {
        if self.is_empty() || !self.contains(column, row) {
            return None;
        }
        let col = f64::from(column - self.area.x) + 0.5;
        let row = f64::from(row - self.area.y) + 0.5;
        Some(Point::new(
            col * self.cell_width(),
            row * self.cell_height(),
        ))
    }
}

// ============================================================================
// CanvasSurface
// ============================================================================

/// [`Surface`] over a ratatui canvas context.
pub struct CanvasSurface<'c, 'a> {
    ctx: &'c mut Context<'a>,
    geometry: CanvasGeometry,
    transform: TransformStack,
}

impl<'c, 'a> CanvasSurface<'c, 'a> {
    pub fn new(ctx: &'c mut Context<'a>, geometry: CanvasGeometry) -> Self {
        Self {
            ctx,
            geometry,
            transform: TransformStack::default(),
        }
    }

    fn strands(&self, width: f64) -> usize {
        let dot = self.geometry.dot_size();
        ((width / dot).round() as usize).clamp(1, MAX_STRANDS)
    }
}

/// Canvas bounds have y pointing up.
fn flip(p: Point) -> (f64, f64) {
    (p.x, SURFACE_HEIGHT - p.y)
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self) {
        self.transform.reset();
    }

    fn save(&mut self) {
        self.transform.save();
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn scale(&mut self, factor: f64) {
        self.transform.scale(factor);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let t = self.transform.current();
        let (from, to) = (t.apply(from), t.apply(to));
        let color = theme::blend(stroke.color, BG_COLOR, stroke.opacity);

        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let len = dx.hypot(dy);
        let normal = if len > f64::EPSILON {
            Point::new(-dy / len, dx / len)
        } else {
            Point::ORIGIN
        };

        let strands = self.strands(t.apply_len(stroke.width));
        let dot = self.geometry.dot_size();
        for k in 0..strands {
            let shift = (k as f64 - (strands - 1) as f64 / 2.0) * dot;
            let offset = Point::new(normal.x * shift, normal.y * shift);
            let (x1, y1) = flip(from + offset);
            let (x2, y2) = flip(to + offset);
            self.ctx.draw(&Line {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: CircleStyle) {
        let t = self.transform.current();
        let radius = t.apply_len(radius);
        let (x, y) = flip(t.apply(center));
        let dot = self.geometry.dot_size();

        let mut fill_radius = radius - dot;
        while fill_radius > 0.0 {
            self.ctx.draw(&Circle {
                x,
                y,
                radius: fill_radius,
                color: style.fill,
            });
            fill_radius -= dot;
        }

        for k in 0..self.strands(t.apply_len(style.stroke_width)) {
            self.ctx.draw(&Circle {
                x,
                y,
                radius: radius - k as f64 * dot,
                color: style.stroke,
            });
        }
    }

    fn fill_text(&mut self, at: Point, text: &str, style: TextStyle) {
        let t = self.transform.current();
        let (x, y) = flip(t.apply(at));
        let half_width = text.chars().count() as f64 * self.geometry.cell_width() / 2.0;

        let mut span_style = Style::default().fg(style.color);
        if let Some(bg) = style.background {
            span_style = span_style.bg(bg);
        }
        if style.bold {
            span_style = span_style.add_modifier(Modifier::BOLD);
        }
        self.ctx.print(
            x - half_width,
            y,
            TextLine::from(Span::styled(text.to_string(), span_style)),
        );
    }
}

// ============================================================================
// EntityGraphWidget
// ============================================================================

/// Widget that paints an [`EntityGraph`] under a [`ViewState`].
pub struct EntityGraphWidget<'a> {
    graph: &'a EntityGraph,
    view: &'a ViewState,
    block: Option<Block<'a>>,
}

impl<'a> EntityGraphWidget<'a> {
    #[must_use]
    pub const fn new(graph: &'a EntityGraph, view: &'a ViewState) -> Self {
        Self {
            graph,
            view,
            block: None,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for EntityGraphWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Self { graph, view, block } = self;
        let inner = block.as_ref().map_or(area, |b| b.inner(area));
        let geometry = CanvasGeometry::new(inner);

        let mut canvas = Canvas::default()
            .background_color(BG_COLOR)
            .marker(Marker::Braille)
            .x_bounds([0.0, SURFACE_WIDTH])
            .y_bounds([0.0, SURFACE_HEIGHT])
            .paint(move |ctx| {
                if geometry.is_empty() {
                    return;
                }
                let mut surface = CanvasSurface::new(ctx, geometry);
                renderer::paint(graph, view, &mut surface);
            });
        if let Some(block) = block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
