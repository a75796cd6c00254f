//! Drawing surface abstraction.
//!
//! The renderer talks to a [`Surface`] with canvas-style calls: a transform
//! stack (`save`/`restore`/`translate`/`scale`) plus line, circle and text
//! primitives in the current coordinate system. [`TransformStack`] implements
//! the transform bookkeeping once so surfaces only map device coordinates.

use std::fmt;

use ratatui::style::Color;

use super::style::{CircleStyle, Stroke, TextStyle};
use super::types::Point;

// ============================================================================
// Surface
// ============================================================================

/// A 2-D drawing target.
pub trait Surface {
    /// Erases everything drawn so far.
    fn clear(&mut self);
    /// Pushes the current transform.
    fn save(&mut self);
    /// Pops the transform pushed by the matching [`save`](Self::save).
    fn restore(&mut self);
    /// Translates subsequent drawing by `(dx, dy)` in current units.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Scales subsequent drawing uniformly.
    fn scale(&mut self, factor: f64);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn draw_circle(&mut self, center: Point, radius: f64, style: CircleStyle);
    /// Draws `text` horizontally and vertically centered on `at`.
    fn fill_text(&mut self, at: Point, text: &str, style: TextStyle);
}

// ============================================================================
// Transform
// ============================================================================

/// Uniform scale followed by a translation: `device = offset + scale * p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset: Point,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        offset: Point::ORIGIN,
        scale: 1.0,
    };

    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.offset.x + self.scale * p.x,
            self.offset.y + self.scale * p.y,
        )
    }

    /// Scales a length (radius, stroke width).
    #[must_use]
    pub fn apply_len(&self, len: f64) -> f64 {
        self.scale * len
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Current transform plus saved states.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    #[must_use]
    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored, as on an HTML canvas.
    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current.offset = self.current.apply(Point::new(dx, dy));
    }

    pub fn scale(&mut self, factor: f64) {
        self.current.scale *= factor;
    }

    /// Drops all saved states and returns to identity.
    pub fn reset(&mut self) {
        self.current = Transform::IDENTITY;
        self.saved.clear();
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// One recorded drawing call. Geometry is in device space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { factor: f64 },
    Line { from: Point, to: Point, stroke: Stroke },
    Circle { center: Point, radius: f64, style: CircleStyle },
    Text { at: Point, text: String, style: TextStyle },
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    transform: TransformStack,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per op.
    #[must_use]
    pub fn trace(&self) -> String {
        self.ops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
impl RecordingSurface {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Transform stack depth, zero when every save was restored.
    pub fn depth(&self) -> usize {
        self.transform.depth()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.transform.save();
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.transform.restore();
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn scale(&mut self, factor: f64) {
        self.transform.scale(factor);
        self.ops.push(DrawOp::Scale { factor });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let t = self.transform.current();
        self.ops.push(DrawOp::Line {
            from: t.apply(from),
            to: t.apply(to),
            stroke: Stroke {
                width: t.apply_len(stroke.width),
                ..stroke
            },
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: CircleStyle) {
        let t = self.transform.current();
        self.ops.push(DrawOp::Circle {
            center: t.apply(center),
            radius: t.apply_len(radius),
            style: CircleStyle {
                stroke_width: t.apply_len(style.stroke_width),
                ..style
            },
        });
    }

    fn fill_text(&mut self, at: Point, text: &str, style: TextStyle) {
        let t = self.transform.current();
        self.ops.push(DrawOp::Text {
            at: t.apply(at),
            text: text.to_string(),
            style,
        });
    }
}

// ============================================================================
// Display
// ============================================================================

struct Hex(Color);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Save => write!(f, "save"),
            Self::Restore => write!(f, "restore"),
            Self::Translate { dx, dy } => write!(f, "translate ({dx:.1}, {dy:.1})"),
            Self::Scale { factor } => write!(f, "scale {factor:.2}"),
            Self::Line { from, to, stroke } => write!(
                f,
                "line ({:.1}, {:.1}) -> ({:.1}, {:.1}) {} alpha={:.2} width={:.1}",
                from.x,
                from.y,
                to.x,
                to.y,
                Hex(stroke.color),
                stroke.opacity,
                stroke.width
            ),
            Self::Circle {
                center,
                radius,
                style,
            } => write!(
                f,
                "circle ({:.1}, {:.1}) r={:.1} fill={} stroke={} width={:.1}",
                center.x,
                center.y,
                radius,
                Hex(style.fill),
                Hex(style.stroke),
                style.stroke_width
            ),
            Self::Text { at, text, style } => {
                write!(f, "text ({:.1}, {:.1}) {text:?} {}px", at.x, at.y, style.size)?;
                if style.bold {
                    write!(f, " bold")?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_scale_order() {
        let mut stack = TransformStack::default();
        stack.translate(10.0, -5.0);
        stack.scale(2.0);
        let p = stack.current().apply(Point::new(3.0, 4.0));
        assert_eq!(p, Point::new(16.0, 3.0));
        assert_eq!(stack.current().apply_len(35.0), 70.0);
    }

    #[test]
    fn test_translate_after_scale_is_scaled() {
        let mut stack = TransformStack::default();
        stack.scale(2.0);
        stack.translate(10.0, 0.0);
        assert_eq!(stack.current().offset, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut stack = TransformStack::default();
        stack.save();
        stack.translate(5.0, 5.0);
        stack.scale(3.0);
        assert_eq!(stack.depth(), 1);
        stack.restore();
        assert_eq!(stack.current(), Transform::IDENTITY);
        assert_eq!(stack.depth(), 0);

        stack.restore();
        assert_eq!(stack.current(), Transform::IDENTITY);
    }

    #[test]
    fn test_recording_applies_transform() {
        let mut surface = RecordingSurface::new();
        surface.translate(100.0, 0.0);
        surface.scale(0.5);
        surface.draw_circle(
            Point::new(400.0, 300.0),
            50.0,
            CircleStyle {
                fill: Color::Rgb(0, 0, 0),
                stroke: Color::Rgb(255, 255, 255),
                stroke_width: 2.0,
            },
        );

        match surface.ops().last() {
            Some(DrawOp::Circle {
                center,
                radius,
                style,
            }) => {
                assert_eq!(*center, Point::new(300.0, 150.0));
                assert_eq!(*radius, 25.0);
                assert_eq!(style.stroke_width, 1.0);
            }
            other => panic!("Expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_discards_previous_ops() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.clear();
        assert_eq!(surface.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Hex(Color::Rgb(219, 234, 254)).to_string(), "#dbeafe");
        assert_eq!(Hex(Color::Red).to_string(), "Red");
    }
}
