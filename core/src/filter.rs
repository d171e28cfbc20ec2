//! Visibility filter
//!
//! Hypotheses the user has selected in the goal view are already on screen,
//! so they are withheld from synthesis. Filtering happens before matching and
//! only removes whole hypotheses.

use crate::ir::{GoalId, HypothesisId, HypothesisView};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Position of a subterm inside a displayed type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubexprPos(pub String);

/// A location the user selected in the goal view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectedLocation {
    /// A whole hypothesis
    Hyp { id: HypothesisId },

    /// Part of a hypothesis's displayed type
    HypType { id: HypothesisId, pos: SubexprPos },

    /// The goal target
    Target,

    /// Part of the goal target
    TargetType { pos: SubexprPos },
}

impl SelectedLocation {
    /// Hypothesis this location points into, if any
    pub fn hypothesis(&self) -> Option<&HypothesisId> {
        match self {
            SelectedLocation::Hyp { id } | SelectedLocation::HypType { id, .. } => Some(id),
            SelectedLocation::Target | SelectedLocation::TargetType { .. } => None,
        }
    }
}

/// A selected location together with the goal it was taken from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalLocation {
    pub goal_id: GoalId,
    pub loc: SelectedLocation,
}

/// Identifiers of the hypotheses selected by `locs`
pub fn hidden_hypotheses(locs: &[SelectedLocation]) -> FxHashSet<&HypothesisId> {
    locs.iter().filter_map(SelectedLocation::hypothesis).collect()
}

/// Drop every hypothesis selected by `locs`, keeping the rest in order
pub fn filter_visible(view: &HypothesisView, locs: &[SelectedLocation]) -> HypothesisView {
    let hidden = hidden_hypotheses(locs);
    if hidden.is_empty() {
        return view.clone();
    }

    view.iter()
        .filter(|hyp| !hidden.contains(&hyp.id))
        .cloned()
        .collect()
}
