//! Entity registry for diagram objects
//!
//! Entities are deduplicated by their display key, not by the term behind
//! them: two different terms that print identically become one entity. The
//! registry only grows and lives for a single synthesis run.

use crate::term::Expr;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of geometric object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Point,
    Line,
    Circle,
}

impl EntityKind {
    /// Type name used in the substance program and the domain schema
    pub fn type_name(&self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Line => "Line",
            EntityKind::Circle => "Circle",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One geometric object appearing in the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,

    /// Display string, the deduplication identity
    pub key: String,

    /// Term the entity was first seen as; never compared
    pub backing: Expr,

    /// Index of first appearance
    pub order: usize,
}

/// Insertion-ordered map from display key to entity
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    index: FxHashMap<String, usize>,
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` unless already present
    ///
    /// Returns the stored entity and whether it was created by this call. An
    /// existing entity is returned unchanged, even when `kind` differs.
    pub fn insert(&mut self, key: &str, term: &Expr, kind: EntityKind) -> (&Entity, bool) {
        if let Some(&order) = self.index.get(key) {
            return (&self.entities[order], false);
        }

        let order = self.entities.len();
        self.index.insert(key.to_string(), order);
        self.entities.push(Entity {
            kind,
            key: key.to_string(),
            backing: term.clone(),
            order,
        });
        (&self.entities[order], true)
    }

    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.index.get(key).map(|&order| &self.entities[order])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entities in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
