//! Inheritance grouping.
//!
//! UML generalization represents one relationship to a shared parent, so
//! several classes inheriting from the same parent are merged into a
//! single tree-shaped connector instead of N overlapping triangles.

use crate::model::Relationship;
use indexmap::IndexMap;

/// A connection whose endpoints have been resolved to class ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection {
    pub source_id: String,
    pub target_id: String,
    pub relationship: Relationship,
    pub label: Option<String>,
    pub source_multiplicity: Option<String>,
    pub target_multiplicity: Option<String>,
}

impl ResolvedConnection {
    /// Creates a plain connection with no label or multiplicities.
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            relationship,
            label: None,
            source_multiplicity: None,
            target_multiplicity: None,
        }
    }
}

/// Two or more classes inheriting from the same parent, drawn as one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritanceGroup {
    pub parent_id: String,
    pub child_ids: Vec<String>,
}

/// Splits connections into merged inheritance groups and residual
/// point-to-point connections.
///
/// Inheritance edges are bucketed by parent. A parent with a single child
/// is demoted back to an ordinary connection (drawn as line + triangle);
/// a parent with two or more children becomes an [`InheritanceGroup`].
/// Non-inheritance edges pass through untouched, in input order; demoted
/// single-child edges follow them, in first-seen parent order.
pub fn group(connections: Vec<ResolvedConnection>) -> (Vec<InheritanceGroup>, Vec<ResolvedConnection>) {
    let mut buckets: IndexMap<String, Vec<ResolvedConnection>> = IndexMap::new();
    let mut residual = Vec::new();

    for connection in connections {
        if connection.relationship == Relationship::Inheritance {
            buckets
                .entry(connection.target_id.clone())
                .or_default()
                .push(connection);
        } else {
            residual.push(connection);
        }
    }

    let mut groups = Vec::new();
    for (parent_id, mut edges) in buckets {
        if edges.len() >= 2 {
            groups.push(InheritanceGroup {
                parent_id,
                child_ids: edges.into_iter().map(|e| e.source_id).collect(),
            });
        } else if let Some(edge) = edges.pop() {
            residual.push(edge);
        }
    }

    (groups, residual)
}
