//! Radial layout of an entity's network.
//!
//! The focal entity sits at the surface center, its accounts on an inner
//! ring and its related parties on an outer ring. Both rings draw their
//! angles from one partition of the circle into `accounts + relationships`
//! slots: accounts take slots `0..n`, relationships continue at `n..n+m`, so
//! no related party is drawn at the same bearing as an account.

use std::collections::HashMap;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCOUNT_RING_RADIUS, CENTER_X, CENTER_Y, OWNERSHIP_LABEL, RELATED_RING_RADIUS,
};
use crate::domain::Entity;

use super::types::{Edge, Node, NodeKind, Point};

// ============================================================================
// AngularPartition
// ============================================================================

/// How account angles are spaced on the inner ring.
///
/// Relationships always use the shared `n + m` step starting at slot `n`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AngularPartition {
    /// Account `i` at `2π·i/(n+m)`: every ring node owns one distinct slot.
    #[default]
    Continuous,
    /// Account `i` at `2π·i/n`: accounts span the full inner ring.
    AccountSpan,
}

// ============================================================================
// EntityGraph
// ============================================================================

/// Positioned nodes and edges for one focal entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl EntityGraph {
    /// Lays out `entity` using the given account spacing.
    #[must_use]
    pub fn with_partition(entity: &Entity, partition: AngularPartition) -> Self {
        let n = entity.accounts.len();
        let m = entity.relationships.len();
        let slots = n + m;
        let center = Point::new(CENTER_X, CENTER_Y);

        let mut nodes = Vec::with_capacity(1 + slots);
        let mut edges = Vec::with_capacity(slots);

        nodes.push(Node {
            id: entity.id.clone(),
            label: entity.name.clone(),
            position: center,
            kind: NodeKind::Focal {
                risk_score: entity.risk_score,
            },
        });

        let account_slots = match partition {
            AngularPartition::Continuous => slots,
            AngularPartition::AccountSpan => n,
        };
        for (idx, account) in entity.accounts.iter().enumerate() {
            nodes.push(Node {
                id: account.account_id.clone(),
                label: format!("{}\n{}", account.account_type, account.account_id),
                position: ring_position(center, ACCOUNT_RING_RADIUS, idx, account_slots),
                kind: NodeKind::Account,
            });
            edges.push(Edge {
                source: entity.id.clone(),
                target: account.account_id.clone(),
                label: OWNERSHIP_LABEL.to_string(),
                strength: 1.0,
            });
        }

        for (idx, rel) in entity.relationships.iter().enumerate() {
            nodes.push(Node {
                id: rel.entity_id.clone(),
                label: rel.entity_name.clone(),
                position: ring_position(center, RELATED_RING_RADIUS, n + idx, slots),
                kind: NodeKind::Related,
            });
            edges.push(Edge {
                source: entity.id.clone(),
                target: rel.entity_id.clone(),
                label: rel.relationship_type.clone(),
                strength: rel.strength,
            });
        }

        Self { nodes, edges }
    }

    /// Id → node index, first occurrence wins.
    #[must_use]
    pub fn index(&self) -> HashMap<&str, &Node> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }
        index
    }

    /// Edges whose endpoints both resolve to a node.
    #[must_use]
    pub fn resolved_edges(&self) -> Vec<(&Edge, &Node, &Node)> {
        let index = self.index();
        self.edges
            .iter()
            .filter_map(|edge| {
                let from = index.get(edge.source.as_str())?;
                let to = index.get(edge.target.as_str())?;
                Some((edge, *from, *to))
            })
            .collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
impl EntityGraph {
    /// Lays out `entity` with the default partition.
    pub fn from_entity(entity: &Entity) -> Self {
        Self::with_partition(entity, AngularPartition::default())
    }

    /// First node carrying `id`.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn focal(&self) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| matches!(node.kind, NodeKind::Focal { .. }))
    }
}

/// Angle in radians of slot `idx` among `slots` equal slots.
#[must_use]
pub fn slot_angle(idx: usize, slots: usize) -> f64 {
    if slots == 0 {
        return 0.0;
    }
    idx as f64 * TAU / slots as f64
}

fn ring_position(center: Point, radius: f64, idx: usize, slots: usize) -> Point {
    let angle = slot_angle(idx, slots);
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}
