//! Application constants for the entigraph TUI.
//!
//! Layout-space geometry, view bounds and UI dimensions live here so the
//! layout, renderer and input mapping agree on the same numbers.

use std::time::Duration;

// ============================================================================
// Layout Space
// ============================================================================

/// Width of the logical drawing surface.
pub const SURFACE_WIDTH: f64 = 800.0;

/// Height of the logical drawing surface.
pub const SURFACE_HEIGHT: f64 = 600.0;

/// Horizontal center of the focal node.
pub const CENTER_X: f64 = 400.0;

/// Vertical center of the focal node.
pub const CENTER_Y: f64 = 300.0;

/// Radius of the account ring.
pub const ACCOUNT_RING_RADIUS: f64 = 150.0;

/// Radius of the related-entity ring.
pub const RELATED_RING_RADIUS: f64 = 250.0;

// ============================================================================
// Node & Label Geometry
// ============================================================================

/// Radius of the focal entity node.
pub const FOCAL_NODE_RADIUS: f64 = 50.0;

/// Radius of an account node.
pub const ACCOUNT_NODE_RADIUS: f64 = 35.0;

/// Radius of a related-entity node.
pub const RELATED_NODE_RADIUS: f64 = 40.0;

/// Stroke width of node outlines.
pub const NODE_OUTLINE_WIDTH: f64 = 2.0;

/// Maximum characters per label line before truncation.
pub const LABEL_MAX_CHARS: usize = 20;

/// Marker appended to truncated label lines.
pub const LABEL_ELLIPSIS: &str = "...";

/// Vertical distance between label lines.
pub const LABEL_LINE_HEIGHT: f64 = 14.0;

/// Gap between the focal node's rim and its risk caption.
pub const RISK_CAPTION_OFFSET: f64 = 12.0;

/// Distance of an edge label above the edge midpoint.
pub const EDGE_LABEL_OFFSET: f64 = 5.0;

/// Risk scores strictly above this use the high-risk palette.
pub const HIGH_RISK_THRESHOLD: u8 = 75;

/// Label attached to every account ownership edge.
pub const OWNERSHIP_LABEL: &str = "owns";

// ============================================================================
// View Bounds
// ============================================================================

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom change per zoom-in / zoom-out command.
pub const ZOOM_STEP: f64 = 0.2;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the entity header (in rows, including borders).
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the legend/toolbar row.
pub const TOOLBAR_HEIGHT: u16 = 1;

/// Height of the footer (in rows).
pub const FOOTER_HEIGHT: u16 = 2;

/// Event poll interval of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);
