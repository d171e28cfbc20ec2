//! Request/response surface of the diagram pipeline
//!
//! One method, `getEuclideanGoal`: resolve a goal, hide the selected
//! hypotheses, synthesize the program and render it.

mod handler;
mod server;

pub use handler::{ContextProvider, GoalRequestHandler, SnapshotProvider};
pub use server::{RpcServer, GET_EUCLIDEAN_GOAL};

use crate::filter::SelectedLocation;
use crate::ir::{ContextRef, GoalId};
use crate::render::{Html, RenderError};
use crate::term::PrettyError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by an RPC call
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("goal {goal_id} not found in context {context_ref}")]
    GoalLookupFailure {
        goal_id: GoalId,
        context_ref: ContextRef,
    },

    #[error("unknown RPC method: {0}")]
    UnknownMethod(String),

    #[error("invalid params: {0}")]
    InvalidParams(serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Pretty(#[from] PrettyError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

/// Parameters of `getEuclideanGoal`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub context_ref: ContextRef,
    pub goal_id: GoalId,

    /// Locations selected in the goal view, in selection order
    #[serde(default)]
    pub locs: Vec<SelectedLocation>,
}

impl GoalRequest {
    pub fn new(context_ref: ContextRef, goal_id: GoalId) -> Self {
        Self {
            context_ref,
            goal_id,
            locs: Vec::new(),
        }
    }

    pub fn with_locs(mut self, locs: Vec<SelectedLocation>) -> Self {
        self.locs = locs;
        self
    }
}

/// Result of `getEuclideanGoal`; `html` is absent when there is nothing to draw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<Html>,
}

impl GoalResponse {
    pub fn empty() -> Self {
        Self { html: None }
    }

    pub fn with_html(html: Html) -> Self {
        Self { html: Some(html) }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_none()
    }
}
