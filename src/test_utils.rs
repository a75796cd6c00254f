//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use ratatui::buffer::Buffer;

use crate::domain::entity::{Account, Entity, EntityProfile, EntityType, Relationship};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct EntityMother;

impl EntityMother {
    pub const ID: &'static str = "ENT-TEST";
    pub const NAME: &'static str = "Test Holdings";

    /// Entity with `accounts` accounts (`ACC-0`, `ACC-1`, ...) and
    /// `relationships` related parties (`REL-0`, ...).
    #[must_use]
    pub fn with_shape(accounts: usize, relationships: usize) -> Entity {
        Entity {
            id: Self::ID.to_string(),
            name: Self::NAME.to_string(),
            risk_score: 40,
            profile: EntityProfile {
                entity_type: EntityType::Corporate,
                jurisdiction: "Luxembourg".to_string(),
                kyc_status: "Standard".to_string(),
                pep_status: false,
                sanctions_hit: false,
            },
            accounts: (0..accounts)
                .map(|i| Self::account(&format!("ACC-{i}"), "Operating", 1_000.0, "EUR"))
                .collect(),
            relationships: (0..relationships)
                .map(|i| {
                    let strength = (i + 1) as f64 / (relationships + 1) as f64;
                    Self::relationship(&format!("REL-{i}"), &format!("Party {i}"), "UBO", strength)
                })
                .collect(),
            alerts: Vec::new(),
            cases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_risk(risk_score: u8) -> Entity {
        Entity {
            risk_score,
            ..Self::with_shape(0, 0)
        }
    }

    #[must_use]
    pub fn account(id: &str, account_type: &str, balance: f64, currency: &str) -> Account {
        Account {
            account_id: id.to_string(),
            account_type: account_type.to_string(),
            balance,
            currency: currency.to_string(),
        }
    }

    #[must_use]
    pub fn relationship(id: &str, name: &str, kind: &str, strength: f64) -> Relationship {
        Relationship {
            entity_id: id.to_string(),
            entity_name: name.to_string(),
            relationship_type: kind.to_string(),
            strength,
        }
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a buffer region into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer, width: u16, height: u16) -> String {
    let mut result = String::new();
    for y in 0..height {
        for x in 0..width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y < height - 1 {
            result.push('\n');
        }
    }
    result
}
