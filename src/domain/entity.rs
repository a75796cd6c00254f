//! Entity types for investigation subjects.
//!
//! An [`Entity`] is the focal subject of a graph view: it owns [`Account`]s
//! and is linked to other parties through [`Relationship`]s. Entities are
//! read-only once loaded from an [`EntityDirectory`](super::EntityDirectory).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity Type
// ============================================================================

/// Legal form of an entity under investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Person,
    Corporate,
    Fund,
    Distributor,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Corporate => "Corporate",
            Self::Fund => "Fund",
            Self::Distributor => "Distributor",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Account
// ============================================================================

/// An account owned exclusively by its entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier (e.g. "ACC-10234").
    pub account_id: String,
    /// Product label (e.g. "Investment", "Operating").
    pub account_type: String,
    /// Balance in currency units; negative for an overdrawn account.
    pub balance: f64,
    /// ISO currency code.
    pub currency: String,
}

// ============================================================================
// Relationship
// ============================================================================

/// A link from the focal entity to another party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Identifier of the related entity.
    pub entity_id: String,
    /// Display name of the related entity.
    pub entity_name: String,
    /// Free-text relationship label (e.g. "UBO", "Subsidiary").
    pub relationship_type: String,
    /// Confidence/closeness score in `[0, 1]`.
    pub strength: f64,
}

// ============================================================================
// Entity Profile
// ============================================================================

/// KYC profile shown alongside the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProfile {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub jurisdiction: String,
    pub kyc_status: String,
    #[serde(default)]
    pub pep_status: bool,
    #[serde(default)]
    pub sanctions_hit: bool,
}

// ============================================================================
// Entity
// ============================================================================

/// The focal subject of a graph rendering session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity identifier (e.g. "ENT-00451").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Risk score in `0..=100`.
    pub risk_score: u8,
    #[serde(flatten)]
    pub profile: EntityProfile,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    /// Alert ids raised against this entity.
    #[serde(default)]
    pub alerts: Vec<String>,
    /// Case ids this entity is part of.
    #[serde(default)]
    pub cases: Vec<String>,
}

impl Entity {
    /// Total account balance per currency, ordered by currency code.
    #[must_use]
    pub fn balances_by_currency(&self) -> BTreeMap<&str, f64> {
        let mut totals = BTreeMap::new();
        for account in &self.accounts {
            *totals.entry(account.currency.as_str()).or_insert(0.0) += account.balance;
        }
        totals
    }

    /// Whether the entity carries any compliance flag worth surfacing.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.profile.pep_status || self.profile.sanctions_hit
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EntityMother;

    #[test]
    fn test_balances_grouped_by_currency() {
        let mut entity = EntityMother::with_shape(0, 0);
        entity.accounts = vec![
            EntityMother::account("ACC-1", "Operating", 100.0, "USD"),
            EntityMother::account("ACC-2", "Savings", 250.0, "EUR"),
            EntityMother::account("ACC-3", "Trading", 50.5, "USD"),
            EntityMother::account("ACC-4", "Current", -20.0, "EUR"),
        ];

        let totals = entity.balances_by_currency();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["USD"], 150.5);
        assert_eq!(totals["EUR"], 230.0);
        assert_eq!(totals.keys().copied().collect::<Vec<_>>(), vec!["EUR", "USD"]);
    }

    #[test]
    fn test_balances_near_integer_limit_do_not_overflow() {
        let mut entity = EntityMother::with_shape(0, 0);
        entity.accounts = vec![
            EntityMother::account("ACC-1", "Reserve", 18_446_744_073_709_551_615.0, "USD"),
            EntityMother::account("ACC-2", "Reserve", 1.0, "USD"),
        ];

        let total = entity.balances_by_currency()["USD"];
        assert!(total.is_finite());
        assert!(total >= 1.8e19);
    }

    #[test]
    fn test_deserialize_camel_case_entity() {
        let json = r#"{
            "id": "ENT-1",
            "name": "Acme Ltd",
            "type": "Corporate",
            "riskScore": 42,
            "jurisdiction": "Malta",
            "kycStatus": "Standard",
            "pepStatus": false,
            "sanctionsHit": true,
            "accounts": [
                { "accountId": "ACC-1", "accountType": "Operating", "balance": 10, "currency": "EUR" }
            ],
            "relationships": [
                { "entityId": "ENT-2", "entityName": "Beta", "relationshipType": "UBO", "strength": 0.5 }
            ]
        }"#;

        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.id, "ENT-1");
        assert_eq!(entity.risk_score, 42);
        assert_eq!(entity.profile.entity_type, EntityType::Corporate);
        assert!(entity.profile.sanctions_hit);
        assert!(entity.is_flagged());
        assert_eq!(entity.accounts[0].account_type, "Operating");
        assert_eq!(entity.relationships[0].relationship_type, "UBO");
        assert!(entity.alerts.is_empty());
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Distributor.to_string(), "Distributor");
    }
}
