//! Domain types for the entigraph explorer.
//!
//! # Module Organization
//!
//! - [`entity`] - Entities, accounts, relationships and KYC profile
//! - [`directory`] - Read-only lookup of entities by id
//! - [`error`] - Directory error types

// ============================================================================
// Module Declarations
// ============================================================================

pub mod directory;
pub mod entity;
pub mod error;
mod fixtures;

// ============================================================================
// Re-exports
// ============================================================================

pub use directory::{EntityDirectory, StaticDirectory};
pub use entity::Entity;
