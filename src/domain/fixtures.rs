//! Built-in entity fixtures for the demo directory.

use super::entity::{Account, Entity, EntityProfile, EntityType, Relationship};

fn account(id: &str, account_type: &str, balance: f64, currency: &str) -> Account {
    Account {
        account_id: id.to_string(),
        account_type: account_type.to_string(),
        balance,
        currency: currency.to_string(),
    }
}

fn relationship(id: &str, name: &str, relationship_type: &str, strength: f64) -> Relationship {
    Relationship {
        entity_id: id.to_string(),
        entity_name: name.to_string(),
        relationship_type: relationship_type.to_string(),
        strength,
    }
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

pub(super) fn horizon_capital() -> Entity {
    Entity {
        id: "ENT-00451".to_string(),
        name: "Horizon Capital Partners Ltd".to_string(),
        risk_score: 78,
        profile: EntityProfile {
            entity_type: EntityType::Corporate,
            jurisdiction: "Cayman Islands".to_string(),
            kyc_status: "Enhanced Due Diligence".to_string(),
            pep_status: true,
            sanctions_hit: false,
        },
        accounts: vec![
            account("ACC-10234", "Investment", 24_500_000.0, "EUR"),
            account("ACC-10235", "Operating", 1_200_000.0, "USD"),
        ],
        relationships: vec![
            relationship("ENT-00452", "Horizon Investments LLC", "Subsidiary", 0.95),
            relationship("ENT-00453", "Michael Chen", "UBO", 0.60),
            relationship("ENT-00454", "Victoria Holdings", "Parent", 0.85),
        ],
        alerts: strings(&["ALT-2024-001234", "ALT-2024-000876", "ALT-2024-000654"]),
        cases: Vec::new(),
    }
}

pub(super) fn zhang_wei() -> Entity {
    Entity {
        id: "ENT-03294".to_string(),
        name: "Zhang Wei".to_string(),
        risk_score: 85,
        profile: EntityProfile {
            entity_type: EntityType::Person,
            jurisdiction: "Hong Kong".to_string(),
            kyc_status: "Enhanced Due Diligence".to_string(),
            pep_status: false,
            sanctions_hit: false,
        },
        accounts: vec![
            account("ACC-20445", "Trading", 3_400_000.0, "USD"),
            account("ACC-20446", "Savings", 890_000.0, "HKD"),
        ],
        relationships: vec![
            relationship("ENT-03295", "Pacific Trade Corp", "Director", 0.90),
            relationship("ENT-03296", "Eastern Investment Fund", "Investor", 0.45),
        ],
        alerts: strings(&["ALT-2024-001189"]),
        cases: strings(&["CASE-2024-0089"]),
    }
}

pub(super) fn builtin_entities() -> Vec<Entity> {
    vec![horizon_capital(), zhang_wei()]
}
