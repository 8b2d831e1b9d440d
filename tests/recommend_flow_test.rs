//! End-to-end tests for the recommendation flow: resolve, log, broadcast.

use garagist::server::handlers::NEED_MORE_INFO_TITLE;
use garagist::server::AppState;
use tempfile::TempDir;

fn engine() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let state = AppState::initialize(dir.path()).unwrap();
    (dir, state)
}

#[test]
fn test_training_example_query_resolves_at_high_confidence() {
    let (_dir, state) = engine();

    // A literal training example must come back as its own label.
    let response = state.recommend("Engine won't turn over").unwrap();

    assert_eq!(response.recommendation.title, "Battery Replacement");
    assert_eq!(response.category, "Electrical");
    assert!(
        response.confidence > 0.6,
        "confidence was {}",
        response.confidence
    );
}

#[test]
fn test_gibberish_query_degrades_to_need_more_info() {
    let (_dir, state) = engine();

    let response = state.recommend("asdf qwer zxcv").unwrap();

    assert_eq!(response.recommendation.title, NEED_MORE_INFO_TITLE);
    assert_eq!(response.category, "General");
    assert_eq!(response.confidence, 0.0);
}

#[test]
fn test_keyword_heavy_query_finds_its_service() {
    let (_dir, state) = engine();

    let response = state
        .recommend("squealing and grinding brakes, soft pedal, bad stopping")
        .unwrap();

    assert_eq!(response.recommendation.title, "Brake Inspection");
    assert!(response.confidence > 0.15);
}

#[test]
fn test_three_requests_yield_three_analytics_entries_in_order() {
    let (_dir, state) = engine();

    state.recommend("time for an oil change").unwrap();
    state.recommend("ac is blowing warm air").unwrap();
    state.recommend("asdf qwer zxcv").unwrap();

    let entries = state.analytics().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].query, "time for an oil change");
    assert_eq!(entries[1].query, "ac is blowing warm air");
    assert_eq!(entries[2].query, "asdf qwer zxcv");
    assert_eq!(entries[2].prediction, NEED_MORE_INFO_TITLE);

    for entry in &entries {
        assert!(
            (0.0..=1.0).contains(&entry.confidence),
            "confidence {} out of range",
            entry.confidence
        );
    }
}

#[test]
fn test_logged_prediction_matches_surfaced_recommendation() {
    let (_dir, state) = engine();

    let response = state.recommend("Engine won't turn over").unwrap();
    let entries = state.analytics().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].prediction, response.recommendation.title);
    // Log stores confidence at 4 decimal places.
    assert!((entries[0].confidence - response.confidence).abs() < 1e-4);
}

#[tokio::test]
async fn test_each_request_broadcasts_full_history() {
    let (_dir, state) = engine();
    let mut rx = state.feed().subscribe();

    state.recommend("time for an oil change").unwrap();
    state.recommend("brakes are squealing").unwrap();

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();

    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();

    // Every broadcast carries the entire history, not a delta.
    assert_eq!(first.as_array().unwrap().len(), 1);
    assert_eq!(second.as_array().unwrap().len(), 2);
}

#[test]
fn test_analytics_on_fresh_engine_is_empty() {
    let (_dir, state) = engine();
    assert!(state.analytics().unwrap().is_empty());
}
