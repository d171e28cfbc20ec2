//! Goals and the read-only proof snapshot requests are served from

use super::hypothesis::HypothesisView;
use crate::term::Expr;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a goal (metavariable) in the proof state
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub String);

impl GoalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to the proof context a request refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextRef(pub String);

impl ContextRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ContextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local context of one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalContext {
    pub id: GoalId,

    /// Hypotheses in context order
    pub hypotheses: HypothesisView,

    /// Goal type, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Expr>,
}

impl GoalContext {
    pub fn new(id: GoalId, hypotheses: HypothesisView) -> Self {
        Self {
            id,
            hypotheses,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Expr) -> Self {
        self.target = Some(target);
        self
    }
}

/// Immutable set of goals captured at one point of the proof
///
/// Cloning is cheap; concurrent requests share the goal contexts.
#[derive(Debug, Clone, Default)]
pub struct ProofSnapshot {
    goals: FxHashMap<GoalId, Arc<GoalContext>>,
}

impl ProofSnapshot {
    pub fn new(goals: impl IntoIterator<Item = GoalContext>) -> Self {
        Self {
            goals: goals
                .into_iter()
                .map(|goal| (goal.id.clone(), Arc::new(goal)))
                .collect(),
        }
    }

    pub fn goal(&self, id: &GoalId) -> Option<Arc<GoalContext>> {
        self.goals.get(id).cloned()
    }
}
