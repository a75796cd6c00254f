//! Error types for entity directory operations.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while loading or querying an entity directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No entity with the given identifier exists.
    #[error("entity '{id}' not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture JSON is malformed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Risk score outside `0..=100`.
    #[error("entity '{id}' has risk score {score}, expected 0..=100")]
    InvalidRiskScore { id: String, score: u8 },

    /// Relationship strength outside `[0, 1]`.
    #[error("relationship {id} -> {target} has strength {strength}, expected 0..=1")]
    InvalidStrength {
        id: String,
        target: String,
        strength: f64,
    },

    /// Account balance is NaN or infinite.
    #[error("account {account} of entity '{id}' has non-finite balance {balance}")]
    InvalidBalance {
        id: String,
        account: String,
        balance: f64,
    },

    /// Two entities share an identifier.
    #[error("duplicate entity id '{id}'")]
    DuplicateEntity { id: String },
}

impl DirectoryError {
    /// Create a new not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

// ============================================================================
// Tests
// ============================================================================
