//! Graph type definitions for entity network visualization.
//!
//! Nodes and edges are derived values: they are rebuilt from an
//! [`Entity`](crate::domain::Entity) on every render and never mutated.

use std::ops::{Add, Sub};

use ratatui::style::Color;

use crate::constants::{
    ACCOUNT_NODE_RADIUS, FOCAL_NODE_RADIUS, HIGH_RISK_THRESHOLD, RELATED_NODE_RADIUS,
};
use crate::theme;

// ============================================================================
// Point
// ============================================================================

/// A position in layout space (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment to `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// NodeKind
// ============================================================================

/// What a node stands for. Only the focal node carries a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The subject the graph is centered on.
    Focal { risk_score: u8 },
    /// An account owned by the focal entity.
    Account,
    /// A party related to the focal entity.
    Related,
}

impl NodeKind {
    /// Drawn radius in layout units.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        match self {
            Self::Focal { .. } => FOCAL_NODE_RADIUS,
            Self::Account => ACCOUNT_NODE_RADIUS,
            Self::Related => RELATED_NODE_RADIUS,
        }
    }

    /// Fill and stroke colors for this kind.
    #[must_use]
    pub const fn palette(&self) -> (Color, Color) {
        match self {
            Self::Focal { risk_score } if *risk_score > HIGH_RISK_THRESHOLD => {
                (theme::HIGH_RISK_FILL, theme::HIGH_RISK_STROKE)
            }
            Self::Focal { .. } => (theme::ENTITY_FILL, theme::ENTITY_STROKE),
            Self::Account => (theme::ACCOUNT_FILL, theme::ACCOUNT_STROKE),
            Self::Related => (theme::RELATED_FILL, theme::RELATED_STROKE),
        }
    }

    /// Legend label for this kind.
    #[must_use]
    pub const fn legend_label(&self) -> &'static str {
        match self {
            Self::Focal { .. } => "Entity",
            Self::Account => "Account",
            Self::Related => "Related Entity",
        }
    }
}

// ============================================================================
// Node
// ============================================================================

/// A positioned graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    /// Label text; may contain embedded newlines.
    pub label: String,
    pub position: Point,
    pub kind: NodeKind,
}

// ============================================================================
// Edge
// ============================================================================

/// A link between two nodes, referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
    /// Visual weight in `[0, 1]`.
    pub strength: f64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::focal_low(NodeKind::Focal { risk_score: 40 }, theme::ENTITY_STROKE, FOCAL_NODE_RADIUS)]
    #[case::focal_at_threshold(NodeKind::Focal { risk_score: 75 }, theme::ENTITY_STROKE, FOCAL_NODE_RADIUS)]
    #[case::focal_high(NodeKind::Focal { risk_score: 76 }, theme::HIGH_RISK_STROKE, FOCAL_NODE_RADIUS)]
    #[case::account(NodeKind::Account, theme::ACCOUNT_STROKE, ACCOUNT_NODE_RADIUS)]
    #[case::related(NodeKind::Related, theme::RELATED_STROKE, RELATED_NODE_RADIUS)]
    fn test_node_kind_encoding(
        #[case] kind: NodeKind,
        #[case] expected_stroke: Color,
        #[case] expected_radius: f64,
    ) {
        assert_eq!(kind.palette().1, expected_stroke);
        assert_eq!(kind.radius(), expected_radius);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(150.0, 130.0);
        let b = Point::new(100.0, 100.0);
        assert_eq!(a - b, Point::new(50.0, 30.0));
        assert_eq!(a + b, Point::new(250.0, 230.0));
        assert_eq!(a.midpoint(b), Point::new(125.0, 115.0));
    }
}
