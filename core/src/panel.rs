//! Client-side panel controller
//!
//! Drives the diagram panel from the goal view's state. Every change of the
//! displayed goals or selected locations starts a new request generation;
//! a response is applied only if its generation is still the latest, so a
//! slow earlier request can never overwrite a newer result.

use crate::filter::GoalLocation;
use crate::ir::{ContextRef, GoalId};
use crate::render::Html;
use crate::rpc::{GoalRequest, GoalRequestHandler, GoalResponse, RpcError, RpcResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// Message shown when the goal has no geometric facts
pub const NO_DIAGRAM_MESSAGE: &str = "No Euclidean facts to draw.";

/// Where the editor cursor currently is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorLocation {
    pub context_ref: ContextRef,

    /// Goal the cursor points into, if any
    #[serde(default)]
    pub goal_id: Option<GoalId>,
}

/// Inputs the panel reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelProps {
    pub cursor: CursorLocation,

    /// Goals currently displayed in the goal view
    pub goals: Vec<GoalId>,

    #[serde(default)]
    pub selected_locations: Vec<GoalLocation>,
}

impl PanelProps {
    /// Build the request for the goal under the cursor
    ///
    /// Only locations selected in that goal are forwarded.
    pub fn goal_request(&self) -> RpcResult<GoalRequest> {
        let lookup_failure = || RpcError::GoalLookupFailure {
            goal_id: self
                .cursor
                .goal_id
                .clone()
                .unwrap_or_else(|| GoalId::new("<none>")),
            context_ref: self.cursor.context_ref.clone(),
        };

        let active = self.cursor.goal_id.as_ref().ok_or_else(lookup_failure)?;
        let goal = self
            .goals
            .iter()
            .find(|g| *g == active)
            .ok_or_else(lookup_failure)?;

        let locs = self
            .selected_locations
            .iter()
            .filter(|loc| &loc.goal_id == goal)
            .map(|loc| loc.loc.clone())
            .collect();

        Ok(GoalRequest::new(self.cursor.context_ref.clone(), goal.clone()).with_locs(locs))
    }
}

/// Issues diagram requests on behalf of a panel
#[async_trait]
pub trait GoalClient: Send + Sync {
    async fn get_euclidean_goal(&self, request: GoalRequest) -> RpcResult<GoalResponse>;
}

/// In-process client calling the handler directly
#[derive(Clone)]
pub struct LocalClient {
    handler: GoalRequestHandler,
}

impl LocalClient {
    pub fn new(handler: GoalRequestHandler) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl GoalClient for LocalClient {
    async fn get_euclidean_goal(&self, request: GoalRequest) -> RpcResult<GoalResponse> {
        self.handler.handle(&request).await
    }
}

/// Panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelStatus {
    #[default]
    Idle,
    Pending,
    Resolved(GoalResponse),
    Errored(String),
}

impl PanelStatus {
    /// Markup for this state
    pub fn view(&self) -> Html {
        match self {
            PanelStatus::Idle => Html::element("div", Vec::new()),
            PanelStatus::Pending => Html::element("span", vec![Html::text("Loading...")]),
            PanelStatus::Resolved(GoalResponse { html: Some(html) }) => html.clone(),
            PanelStatus::Resolved(GoalResponse { html: None }) => {
                Html::element("span", vec![Html::text(NO_DIAGRAM_MESSAGE)])
            }
            PanelStatus::Errored(message) => Html::text(message.clone()),
        }
    }
}

#[derive(Debug, Default)]
struct PanelState {
    status: PanelStatus,
    generation: u64,
    props: Option<PanelProps>,
}

/// Reactive driver of one diagram panel
pub struct PanelController<C> {
    client: C,
    state: Mutex<PanelState>,
}

impl<C: GoalClient> PanelController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(PanelState::default()),
        }
    }

    /// React to new props, returning the status once this update settles
    ///
    /// Unchanged props issue no request. A response that arrives after a
    /// newer update started is dropped and the newer status is returned.
    pub async fn update(&self, props: &PanelProps) -> PanelStatus {
        let generation = {
            let mut state = self.state.lock().await;
            if state.props.as_ref() == Some(props) {
                return state.status.clone();
            }
            state.props = Some(props.clone());
            state.generation += 1;
            state.status = PanelStatus::Pending;
            state.generation
        };

        let outcome = match props.goal_request() {
            Ok(request) => self.client.get_euclidean_goal(request).await,
            Err(err) => Err(err),
        };

        let mut state = self.state.lock().await;
        if state.generation != generation {
            debug!(
                generation,
                latest = state.generation,
                "Dropping stale diagram response"
            );
            return state.status.clone();
        }

        state.status = match outcome {
            Ok(response) => PanelStatus::Resolved(response),
            Err(err) => PanelStatus::Errored(err.to_string()),
        };
        state.status.clone()
    }

    pub async fn status(&self) -> PanelStatus {
        self.state.lock().await.status.clone()
    }

    /// Number of updates that issued a request so far
    pub async fn generation(&self) -> u64 {
        self.state.lock().await.generation
    }

    pub async fn view(&self) -> Html {
        self.state.lock().await.status.view()
    }
}
