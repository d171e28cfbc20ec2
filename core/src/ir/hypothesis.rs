//! Hypotheses visible in a goal context

use crate::term::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a local hypothesis, stable for the lifetime of a goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisId(pub String);

impl HypothesisId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, typed assumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,

    /// User-facing name
    pub name: String,

    /// Type of the hypothesis
    pub ty: Expr,
}

impl Hypothesis {
    pub fn new(id: impl Into<String>, name: impl Into<String>, ty: Expr) -> Self {
        Self {
            id: HypothesisId::new(id),
            name: name.into(),
            ty,
        }
    }
}

/// Ordered list of visible hypotheses, in context order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisView {
    hypotheses: Vec<Hypothesis>,
}

impl HypothesisView {
    pub fn new(hypotheses: Vec<Hypothesis>) -> Self {
        Self { hypotheses }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hypothesis> {
        self.hypotheses.iter()
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}

impl FromIterator<Hypothesis> for HypothesisView {
    fn from_iter<I: IntoIterator<Item = Hypothesis>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HypothesisView {
    type Item = &'a Hypothesis;
    type IntoIter = std::slice::Iter<'a, Hypothesis>;

    fn into_iter(self) -> Self::IntoIter {
        self.hypotheses.iter()
    }
}
