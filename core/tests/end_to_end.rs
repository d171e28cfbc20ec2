//! End-to-end pipeline tests
//!
//! Fixture loading → visibility filter → synthesis → rendering → response

use euclid_diagram_core::loader::{load_goal_dir, load_goal_file};
use euclid_diagram_core::rpc::{SnapshotProvider, GET_EUCLIDEAN_GOAL};
use euclid_diagram_core::*;
use std::sync::Arc;

const FULL_CONFIGURATION: &str = "\
AutoLabel All
Point a
Point b
Point c
Between(a, b, c)
Line L
OnLine(a, L)
Line M
OnLine(b, M)
OnLine(c, L)
OnLine(c, M)
Circle C
OnCircle(a, C)
Circle D
OnCircle(a, D)
CenterCircle(b, C)
Circle E
CenterCircle(c, E)";

/// Helper to load a goal from fixtures
fn load_goal(name: &str) -> GoalContext {
    let path = format!("tests/fixtures/goals/{}.json", name);
    load_goal_file(&path)
        .expect("Failed to load goal fixture")
        .to_goal_context()
        .expect("Fixture terms should parse")
}

fn handler() -> GoalRequestHandler {
    let snapshot = ProofSnapshot::new(vec![
        load_goal("g01_full_configuration"),
        load_goal("g02_no_geometry"),
    ]);
    let provider = SnapshotProvider::new().with_snapshot(ContextRef::new("ctx"), snapshot);
    GoalRequestHandler::new(Arc::new(provider))
}

fn request(goal: &str, hidden: &[&str]) -> GoalRequest {
    GoalRequest::new(ContextRef::new("ctx"), GoalId::new(goal)).with_locs(
        hidden
            .iter()
            .map(|id| SelectedLocation::Hyp { id: HypothesisId::new(*id) })
            .collect(),
    )
}

#[test]
fn test_full_configuration_program() {
    let goal = load_goal("g01_full_configuration");
    let synthesis = synthesize(&goal.hypotheses, &PlainPrinter).unwrap();

    assert_eq!(synthesis.substance().unwrap(), FULL_CONFIGURATION);

    let diagram = synthesis.diagram().unwrap();
    assert_eq!(diagram.program.num_facts(), 9);
    assert_eq!(diagram.entities.len(), 8);
}

#[test]
fn test_hidden_hypothesis_keeps_shared_entity() {
    let synthesis = handler()
        .synthesize(&request("g01", &["haC"]))
        .unwrap();
    let text = synthesis.substance().unwrap();

    assert!(!text.contains("OnCircle(a, C)"));
    // CenterCircle(b, C) still references C
    assert!(text.lines().any(|line| line == "Circle C"));

    let expected = FULL_CONFIGURATION
        .lines()
        .filter(|line| *line != "OnCircle(a, C)")
        .collect::<Vec<_>>()
        .join("\n");
    // C is now first declared right before CenterCircle(b, C)
    let expected = expected
        .replacen("Circle C\n", "", 1)
        .replacen("CenterCircle(b, C)", "Circle C\nCenterCircle(b, C)", 1);
    assert_eq!(text, expected);
}

#[test]
fn test_hidden_hypothesis_drops_unique_entity() {
    let synthesis = handler().synthesize(&request("g01", &["hcE"])).unwrap();
    let text = synthesis.substance().unwrap();

    assert!(!text.contains("Circle E"));
    assert!(!text.contains("CenterCircle(c, E)"));
}

#[test]
fn test_hyp_type_location_hides_like_hyp() {
    let by_hyp = handler().synthesize(&request("g01", &["haD"])).unwrap();

    let by_type = GoalRequest::new(ContextRef::new("ctx"), GoalId::new("g01")).with_locs(vec![
        SelectedLocation::HypType {
            id: HypothesisId::new("haD"),
            pos: SubexprPos("/1".to_string()),
        },
    ]);
    let by_type = handler().synthesize(&by_type).unwrap();

    assert_eq!(by_hyp.substance(), by_type.substance());
}

#[tokio::test]
async fn test_non_geometric_goal_has_no_diagram() {
    let response = handler().handle(&request("g02", &[])).await.unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_missing_goal_is_lookup_failure() {
    let err = handler().handle(&request("g99", &[])).await.unwrap_err();
    assert!(matches!(err, RpcError::GoalLookupFailure { .. }));
    assert!(err.to_string().contains("g99"));
}

#[tokio::test]
async fn test_dispatch_round_trip() {
    let server = RpcServer::new(handler());
    let params = serde_json::json!({
        "contextRef": "ctx",
        "goalId": "g01",
        "locs": []
    });

    let response = server.dispatch(GET_EUCLIDEAN_GOAL, params).await.unwrap();
    let props = &response["html"]["component"]["props"];

    assert_eq!(props["sub"], FULL_CONFIGURATION);
    assert_eq!(props["maxOptSteps"], 500);
    assert_eq!(props["embeds"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_dispatch_rejects_bad_calls() {
    let server = RpcServer::new(handler());

    let err = server
        .dispatch("getGoals", serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::UnknownMethod(_)));

    let err = server
        .dispatch(GET_EUCLIDEAN_GOAL, serde_json::json!({"goalId": 3}))
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::InvalidParams(_)));
}

#[tokio::test]
async fn test_concurrent_requests_share_snapshot() {
    let server = RpcServer::new(handler());

    let calls: Vec<_> = (0..8)
        .map(|i| {
            let goal = if i % 2 == 0 { "g01" } else { "g02" };
            let params = serde_json::json!({"contextRef": "ctx", "goalId": goal});
            server.spawn_dispatch(GET_EUCLIDEAN_GOAL.to_string(), params)
        })
        .collect();

    for (i, call) in calls.into_iter().enumerate() {
        let response = call.await.expect("task panicked").unwrap();
        if i % 2 == 0 {
            assert_eq!(response["html"]["component"]["props"]["sub"], FULL_CONFIGURATION);
        } else {
            assert!(response.get("html").is_none());
        }
    }
}

#[test]
fn test_load_goal_dir_skips_non_json() {
    let fixtures = load_goal_dir("tests/fixtures/goals").unwrap();
    let ids: Vec<&str> = fixtures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["g01", "g02"]);
}

#[test]
fn test_load_goal_dir_skips_unparseable_fixtures() {
    let fixtures = load_goal_dir("tests/fixtures/invalid").unwrap();
    let ids: Vec<&str> = fixtures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["ok"]);
}

#[test]
fn test_load_goal_file_rejects_bad_term() {
    let err = load_goal_file("tests/fixtures/invalid/a_bad_term.json").unwrap_err();
    assert!(matches!(err, LoadError::InvalidTerm { ref name, .. } if name == "hbad"));

    let err = load_goal_file("tests/fixtures/invalid/b_malformed.json").unwrap_err();
    assert!(matches!(err, LoadError::ParseError(_)));
}
