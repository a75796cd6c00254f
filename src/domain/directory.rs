//! Read-only entity directory.
//!
//! The graph view never owns investigation data; it asks an
//! [`EntityDirectory`] for the focal entity by id. [`StaticDirectory`] is the
//! in-memory implementation, filled either from the built-in fixtures or from
//! a JSON fixture file. A store-backed directory would implement the same
//! trait.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::entity::Entity;
use super::error::DirectoryError;
use super::fixtures;

// ============================================================================
// Trait
// ============================================================================

/// Lookup-by-id access to investigation entities.
pub trait EntityDirectory {
    /// Returns the entity with the given identifier, if any.
    fn lookup(&self, id: &str) -> Option<&Entity>;

    /// All identifiers in a stable order.
    fn ids(&self) -> Vec<&str>;

    /// Number of entities in the directory.
    fn len(&self) -> usize {
        self.ids().len()
    }

    /// Whether the directory holds no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`lookup`](Self::lookup) but reports a missing id as an error.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no entity has this id.
    fn require(&self, id: &str) -> Result<&Entity, DirectoryError> {
        self.lookup(id).ok_or_else(|| DirectoryError::not_found(id))
    }
}

// ============================================================================
// StaticDirectory
// ============================================================================

/// In-memory directory ordered by entity id.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entities: BTreeMap<String, Entity>,
}

impl StaticDirectory {
    /// Directory holding the built-in demo entities.
    #[must_use]
    pub fn builtin() -> Self {
        let entities = fixtures::builtin_entities()
            .into_iter()
            .map(|entity| (entity.id.clone(), entity))
            .collect();
        Self { entities }
    }

    /// Builds a directory from entities, validating each one.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity has an out-of-range risk score or
    /// relationship strength, a non-finite balance, or if two entities share
    /// an id.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, DirectoryError> {
        let mut map = BTreeMap::new();
        for entity in entities {
            validate(&entity)?;
            if map.contains_key(&entity.id) {
                return Err(DirectoryError::DuplicateEntity { id: entity.id });
            }
            map.insert(entity.id.clone(), entity);
        }
        Ok(Self { entities: map })
    }

    /// Parses a JSON array of entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let entities: Vec<Entity> = serde_json::from_str(json)?;
        Self::from_entities(entities)
    }

    /// Reads and parses a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let content = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} entities from {}",
            directory.entities.len(),
            path.display()
        );
        Ok(directory)
    }
}

impl EntityDirectory for StaticDirectory {
    fn lookup(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    fn ids(&self) -> Vec<&str> {
        self.entities.keys().map(String::as_str).collect()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}

fn validate(entity: &Entity) -> Result<(), DirectoryError> {
    if entity.risk_score > 100 {
        return Err(DirectoryError::InvalidRiskScore {
            id: entity.id.clone(),
            score: entity.risk_score,
        });
    }
    for account in &entity.accounts {
        if !account.balance.is_finite() {
            return Err(DirectoryError::InvalidBalance {
                id: entity.id.clone(),
                account: account.account_id.clone(),
                balance: account.balance,
            });
        }
    }
    for rel in &entity.relationships {
        if !(0.0..=1.0).contains(&rel.strength) {
            return Err(DirectoryError::InvalidStrength {
                id: entity.id.clone(),
                target: rel.entity_id.clone(),
                strength: rel.strength,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
