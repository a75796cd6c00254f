use crate::graph::Point;

/// Application actions triggered by user input.
///
/// Pointer positions are already mapped into graph layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    NextEntity,
    PrevEntity,
    ZoomIn,
    ZoomOut,
    ResetView,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    Resize(u16, u16),
}
