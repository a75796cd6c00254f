//! Entity relationship graph: radial layout, paint pass and terminal backend.
//!
//! # Module Structure
//!
//! - [`types`]: Nodes, edges and layout-space points
//! - [`layout`]: Radial ring layout of an entity's accounts and relationships
//! - [`style`]: Visual encoding (edge weight, node palettes, label wrapping)
//! - [`view`]: Pan/zoom state driven by pointer input
//! - [`surface`]: Drawing surface trait, transform stack and recording surface
//! - [`renderer`]: The paint pass
//! - [`canvas`]: ratatui canvas surface and widget
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::graph::{AngularPartition, EntityGraph, EntityGraphWidget, ViewState};
//!
//! let graph = EntityGraph::with_partition(&entity, AngularPartition::Continuous);
//! let view = ViewState::new();
//! frame.render_widget(EntityGraphWidget::new(&graph, &view), area);
//! ```

pub mod canvas;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod types;
pub mod view;


pub use canvas::{CanvasGeometry, EntityGraphWidget};
pub use layout::{AngularPartition, EntityGraph};
pub use surface::RecordingSurface;
pub use types::{NodeKind, Point};
pub use view::ViewState;
