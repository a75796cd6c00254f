//! Pan/zoom view state for the graph canvas.
//!
//! Panning is absolute: while a drag is in progress the pan offset is always
//! `pointer - drag_offset`, where the offset was captured on pointer-down.
//! Intermediate pointer positions therefore never accumulate error.

use crate::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use super::types::Point;

/// Current view transform plus drag tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    pan: Point,
    /// `pointer - pan` captured at drag start; `Some` while dragging.
    drag_offset: Option<Point>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
            drag_offset: None,
        }
    }

    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub const fn pan(&self) -> Point {
        self.pan
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Begins a drag at `pointer`.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag_offset = Some(pointer - self.pan);
    }

    /// Moves the pan with the pointer if a drag is in progress.
    ///
    /// Returns whether the view changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(offset) = self.drag_offset else {
            return false;
        };
        let pan = pointer - offset;
        let changed = pan != self.pan;
        self.pan = pan;
        changed
    }

    /// Ends a drag.
    pub fn pointer_up(&mut self) {
        self.drag_offset = None;
    }

    /// Ends a drag because the pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Restores zoom 1 and zero pan. A drag in progress is left alone.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::ORIGIN;
    }

    #[cfg(test)]
    pub(crate) fn with(zoom: f64, pan: Point) -> Self {
        Self {
            zoom,
            pan,
            drag_offset: None,
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
    fn test_new_view_is_identity() {
        let view = ViewState::new();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.pan(), Point::ORIGIN);
        assert!(!view.is_dragging());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut view = ViewState::new();
        for _ in 0..30 {
            view.zoom_in();
            assert!(view.zoom() <= MAX_ZOOM);
        }
        assert_eq!(view.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut view = ViewState::new();
        for _ in 0..30 {
            view.zoom_out();
            assert!(view.zoom() >= MIN_ZOOM);
        }
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_single_zoom_step() {
        let mut view = ViewState::new();
        view.zoom_in();
        assert!((view.zoom() - 1.2).abs() < 1e-9);
        view.zoom_out();
        view.zoom_out();
        assert!((view.zoom() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_pan_follows_pointer_delta() {
        let mut view = ViewState::new();
        view.pointer_down(Point::new(100.0, 100.0));
        assert!(view.is_dragging());
        assert!(view.pointer_move(Point::new(150.0, 130.0)));
        assert_eq!(view.pan(), Point::new(50.0, 30.0));
    }

    #[test]
    fn test_pan_independent_of_intermediate_moves() {
        let start = Point::new(-20.0, 15.0);
        let mut direct = ViewState::with(1.0, start);
        let mut wandering = ViewState::with(1.0, start);

        direct.pointer_down(Point::new(100.0, 100.0));
        direct.pointer_move(Point::new(150.0, 130.0));

        wandering.pointer_down(Point::new(100.0, 100.0));
        for (x, y) in [(400.0, -3.0), (101.5, 99.25), (-250.0, 800.0)] {
            wandering.pointer_move(Point::new(x, y));
        }
        wandering.pointer_move(Point::new(150.0, 130.0));

        assert_eq!(direct.pan(), wandering.pan());
        assert_eq!(direct.pan() - start, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut view = ViewState::new();
        assert!(!view.pointer_move(Point::new(10.0, 10.0)));
        assert_eq!(view.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_pointer_up_and_leave_end_drag() {
        let mut view = ViewState::new();
        view.pointer_down(Point::new(1.0, 1.0));
        view.pointer_up();
        assert!(!view.is_dragging());
        assert!(!view.pointer_move(Point::new(50.0, 50.0)));

        view.pointer_down(Point::new(1.0, 1.0));
        view.pointer_leave();
        assert!(!view.is_dragging());
    }

    #[test]
    fn test_second_drag_continues_from_current_pan() {
        let mut view = ViewState::new();
        view.pointer_down(Point::new(0.0, 0.0));
        view.pointer_move(Point::new(10.0, 5.0));
        view.pointer_up();

        view.pointer_down(Point::new(200.0, 200.0));
        view.pointer_move(Point::new(210.0, 200.0));
        assert_eq!(view.pan(), Point::new(20.0, 5.0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut view = ViewState::with(2.4, Point::new(80.0, -20.0));
        view.reset();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.pan(), Point::ORIGIN);

        let once = view;
        view.reset();
        assert_eq!(view, once);
    }
}
