//! Panel controller tests
//!
//! Drives the panel through its states against an in-process handler,
//! including out-of-order responses.

use async_trait::async_trait;
use euclid_diagram_core::panel::{CursorLocation, NO_DIAGRAM_MESSAGE};
use euclid_diagram_core::rpc::SnapshotProvider;
use euclid_diagram_core::*;
use std::sync::Arc;
use tokio::sync::Notify;

fn goal(id: &str, types: &[&str]) -> GoalContext {
    let hyps = types
        .iter()
        .enumerate()
        .map(|(i, ty)| Hypothesis::new(format!("h{}", i), format!("h{}", i), Expr::parse(ty).unwrap()))
        .collect();
    GoalContext::new(GoalId::new(id), hyps)
}

fn handler() -> GoalRequestHandler {
    let snapshot = ProofSnapshot::new(vec![
        goal("g1", &["OnLine a L"]),
        goal("g2", &["OnCircle p C", "CenterCircle q C"]),
        goal("g3", &["Ne a b"]),
    ]);
    let provider = SnapshotProvider::new().with_snapshot(ContextRef::new("ctx"), snapshot);
    GoalRequestHandler::new(Arc::new(provider))
}

fn props(active: &str, selected: &[(&str, &str)]) -> PanelProps {
    PanelProps {
        cursor: CursorLocation {
            context_ref: ContextRef::new("ctx"),
            goal_id: Some(GoalId::new(active)),
        },
        goals: vec![GoalId::new("g1"), GoalId::new("g2"), GoalId::new("g3")],
        selected_locations: selected
            .iter()
            .map(|(goal, hyp)| GoalLocation {
                goal_id: GoalId::new(*goal),
                loc: SelectedLocation::Hyp { id: HypothesisId::new(*hyp) },
            })
            .collect(),
    }
}

fn substance(status: &PanelStatus) -> Option<String> {
    match status {
        PanelStatus::Resolved(GoalResponse {
            html: Some(Html::Component { props, .. }),
        }) => props["sub"].as_str().map(str::to_string),
        _ => None,
    }
}

/// Holds requests for one goal until released
struct GatedClient {
    inner: LocalClient,
    gated: GoalId,
    gate: Arc<Notify>,
}

#[async_trait]
impl GoalClient for GatedClient {
    async fn get_euclidean_goal(&self, request: GoalRequest) -> RpcResult<GoalResponse> {
        if request.goal_id == self.gated {
            self.gate.notified().await;
        }
        self.inner.get_euclidean_goal(request).await
    }
}

#[tokio::test]
async fn test_panel_resolves_diagram() {
    let panel = PanelController::new(LocalClient::new(handler()));
    assert_eq!(panel.status().await, PanelStatus::Idle);

    let status = panel.update(&props("g1", &[])).await;

    assert_eq!(
        substance(&status).as_deref(),
        Some("AutoLabel All\nPoint a\nLine L\nOnLine(a, L)")
    );
    assert!(matches!(panel.view().await, Html::Component { .. }));
}

#[tokio::test]
async fn test_panel_shows_fallback_without_facts() {
    let panel = PanelController::new(LocalClient::new(handler()));

    let status = panel.update(&props("g3", &[])).await;

    assert_eq!(status, PanelStatus::Resolved(GoalResponse::empty()));
    assert_eq!(panel.view().await.text_content(), NO_DIAGRAM_MESSAGE);
}

#[tokio::test]
async fn test_panel_errors_on_unknown_goal() {
    let panel = PanelController::new(LocalClient::new(handler()));

    let status = panel.update(&props("g9", &[])).await;

    let PanelStatus::Errored(message) = status else {
        panic!("expected an error state");
    };
    assert!(message.contains("g9"));
    assert_eq!(panel.view().await, Html::text(message));
}

#[tokio::test]
async fn test_selection_in_active_goal_hides_hypothesis() {
    let panel = PanelController::new(LocalClient::new(handler()));

    // A selection in another goal does not affect g2
    let status = panel.update(&props("g2", &[("g1", "h0")])).await;
    assert!(substance(&status).unwrap().contains("OnCircle(p, C)"));

    let status = panel.update(&props("g2", &[("g2", "h0")])).await;
    assert_eq!(
        substance(&status).as_deref(),
        Some("AutoLabel All\nPoint q\nCircle C\nCenterCircle(q, C)")
    );
}

#[tokio::test]
async fn test_unchanged_props_issue_no_request() {
    let panel = PanelController::new(LocalClient::new(handler()));

    panel.update(&props("g1", &[])).await;
    panel.update(&props("g1", &[])).await;
    assert_eq!(panel.generation().await, 1);

    panel.update(&props("g2", &[])).await;
    assert_eq!(panel.generation().await, 2);
}

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let gate = Arc::new(Notify::new());
    let panel = Arc::new(PanelController::new(GatedClient {
        inner: LocalClient::new(handler()),
        gated: GoalId::new("g1"),
        gate: gate.clone(),
    }));

    let slow = tokio::spawn({
        let panel = panel.clone();
        async move { panel.update(&props("g1", &[])).await }
    });

    while panel.generation().await == 0 {
        tokio::task::yield_now().await;
    }
    assert_eq!(panel.status().await, PanelStatus::Pending);
    assert!(panel.view().await.text_content().contains("Loading"));

    let fast = panel.update(&props("g2", &[])).await;
    assert!(substance(&fast).unwrap().contains("CenterCircle(q, C)"));

    gate.notify_one();
    let settled = slow.await.unwrap();

    // The earlier request finished last but must not win
    assert_eq!(settled, fast);
    assert_eq!(panel.status().await, fast);
}
