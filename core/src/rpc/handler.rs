//! Server-side handler for `getEuclideanGoal`

use super::{GoalRequest, GoalResponse, RpcError, RpcResult};
use crate::config::DiagramConfig;
use crate::filter::filter_visible;
use crate::ir::{ContextRef, GoalContext, GoalId, ProofSnapshot};
use crate::render::{ComponentRenderer, DiagramInput, DiagramRenderer};
use crate::synthesis::{synthesize, Synthesis};
use crate::term::{PlainPrinter, PrettyPrinter};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Read-only access to the goal contexts of the proof
pub trait ContextProvider: Send + Sync {
    /// Locate `goal` in the context referenced by `context`
    fn goal(&self, context: &ContextRef, goal: &GoalId) -> Option<Arc<GoalContext>>;
}

/// Serves goals from in-memory snapshots, one per context reference
#[derive(Debug, Clone, Default)]
pub struct SnapshotProvider {
    snapshots: FxHashMap<ContextRef, ProofSnapshot>,
}

impl SnapshotProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, context: ContextRef, snapshot: ProofSnapshot) -> Self {
        self.snapshots.insert(context, snapshot);
        self
    }
}

impl ContextProvider for SnapshotProvider {
    fn goal(&self, context: &ContextRef, goal: &GoalId) -> Option<Arc<GoalContext>> {
        self.snapshots.get(context)?.goal(goal)
    }
}

/// Resolves goals and turns their visible hypotheses into diagrams
///
/// Holds no per-request state; clones share the same collaborators.
#[derive(Clone)]
pub struct GoalRequestHandler {
    contexts: Arc<dyn ContextProvider>,
    printer: Arc<dyn PrettyPrinter>,
    /// Custom renderer; `None` renders the configured component
    renderer: Option<Arc<dyn DiagramRenderer>>,
    config: Arc<DiagramConfig>,
}

impl GoalRequestHandler {
    /// Handler with the plain printer, default config and component renderer
    pub fn new(contexts: Arc<dyn ContextProvider>) -> Self {
        Self {
            contexts,
            printer: Arc::new(PlainPrinter),
            renderer: None,
            config: Arc::new(DiagramConfig::default()),
        }
    }

    pub fn with_printer(mut self, printer: Arc<dyn PrettyPrinter>) -> Self {
        self.printer = printer;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn DiagramRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the config; a renderer set with `with_renderer` is kept
    pub fn with_config(mut self, config: DiagramConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Synthesize without rendering; used by callers that only want the text
    pub fn synthesize(&self, request: &GoalRequest) -> RpcResult<Synthesis> {
        let goal = self.lookup(request)?;
        let visible = filter_visible(&goal.hypotheses, &request.locs);
        Ok(synthesize(&visible, self.printer.as_ref())?)
    }

    pub async fn handle(&self, request: &GoalRequest) -> RpcResult<GoalResponse> {
        info!(
            goal = %request.goal_id,
            context = %request.context_ref,
            selected = request.locs.len(),
            "Handling getEuclideanGoal"
        );

        let diagram = match self.synthesize(request)? {
            Synthesis::Empty => {
                debug!(goal = %request.goal_id, "No geometric facts to draw");
                return Ok(GoalResponse::empty());
            }
            Synthesis::Diagram(diagram) => diagram,
        };

        let input = DiagramInput::new(&diagram, &self.config);
        let html = match &self.renderer {
            Some(renderer) => renderer.render(input).await?,
            None => ComponentRenderer::from_config(&self.config).render(input).await?,
        };
        Ok(GoalResponse::with_html(html))
    }

    fn lookup(&self, request: &GoalRequest) -> RpcResult<Arc<GoalContext>> {
        self.contexts
            .goal(&request.context_ref, &request.goal_id)
            .ok_or_else(|| {
                warn!(goal = %request.goal_id, context = %request.context_ref, "Goal lookup failed");
                RpcError::GoalLookupFailure {
                    goal_id: request.goal_id.clone(),
                    context_ref: request.context_ref.clone(),
                }
            })
    }
}
