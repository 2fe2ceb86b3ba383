//! Integration tests for the session catalog and session detail
//!
//! Focus on response ordering: a late answer for a session the user has
//! already navigated away from must never replace what is on screen, while
//! late answers for inactive views still update their own slice.

use shotdeck::api::{BackendClient, Screenshot, Session, SessionDetail};
use shotdeck::config::Config;
use shotdeck::logic::catalog::filter_sessions;
use shotdeck::model::LoadState;
use shotdeck::services::api::{ApiRequest, ApiResponse, CatalogTarget};
use shotdeck::{App, View};
use tokio::sync::mpsc;

fn test_app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
    let (api_tx, request_rx) = mpsc::unbounded_channel();
    let (_response_tx, api_rx) = mpsc::unbounded_channel();
    let app = App::with_channels(
        Config::default(),
        BackendClient::new("http://127.0.0.1:1".to_string()),
        api_tx,
        api_rx,
    );
    (app, request_rx)
}

fn session(id: i64, name: &str, description: Option<&str>) -> Session {
    Session {
        id,
        name: name.to_string(),
        description: description.map(|d| d.to_string()),
        created_at: "2025-03-01T10:00:00".to_string(),
        screenshot_count: 0,
        analyzed_count: 0,
        avg_relevance: 0.0,
    }
}

fn shot(analyzed: bool, relevance: Option<u32>) -> Screenshot {
    Screenshot {
        id: None,
        file_path: "/srv/data/screenshots/s/x.png".to_string(),
        timestamp: None,
        analyzed,
        relevance_score: None,
        relevance_display: relevance,
        ai_summary: None,
    }
}

fn detail(id: i64, name: &str, screenshots: Vec<Screenshot>) -> SessionDetail {
    SessionDetail {
        session: session(id, name, None),
        screenshots,
    }
}

/// Test: Filtering is case-insensitive and deterministic
#[test]
fn test_filter_matches_name_or_description() {
    let sessions = vec![
        session(1, "Planning", None),
        session(2, "retro", Some("Sprint PLANNING follow-up")),
        session(3, "deep work", None),
    ];

    let first: Vec<i64> = filter_sessions(&sessions, "plan").iter().map(|s| s.id).collect();
    let second: Vec<i64> = filter_sessions(&sessions, "plan").iter().map(|s| s.id).collect();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(first, second);

    assert_eq!(filter_sessions(&sessions, "").len(), 3);
}

/// Test: A failed list replaces the cached sessions with an error state
#[test]
fn test_catalog_failure_clears_cached_list() {
    let (mut app, _rx) = test_app();
    app.handle_api_response(ApiResponse::SessionsResult {
        target: CatalogTarget::Catalog,
        sessions: Ok(vec![session(1, "a", None), session(2, "b", None)]),
    });
    assert_eq!(app.model.catalog.sessions.len(), 2);

    app.handle_api_response(ApiResponse::SessionsResult {
        target: CatalogTarget::Catalog,
        sessions: Err(anyhow::anyhow!("connection refused")),
    });
    assert!(app.model.catalog.sessions.is_empty());
    assert!(app.model.catalog.state.error().is_some());
    assert_eq!(app.model.catalog.selected, None);
}

/// Test: Zero sessions is a loaded state, not an error
#[test]
fn test_empty_catalog_is_loaded() {
    let (mut app, _rx) = test_app();
    app.handle_api_response(ApiResponse::SessionsResult {
        target: CatalogTarget::Catalog,
        sessions: Ok(vec![]),
    });
    assert_eq!(app.model.catalog.state, LoadState::Loaded);
    assert!(app.model.catalog.selected.is_none());
}

/// Test: Opening the selected session uses the filtered list
#[test]
fn test_open_selected_respects_filter() {
    let (mut app, mut rx) = test_app();
    app.handle_api_response(ApiResponse::SessionsResult {
        target: CatalogTarget::Catalog,
        sessions: Ok(vec![session(1, "alpha", None), session(2, "beta", None)]),
    });
    app.set_catalog_filter("bet".to_string());
    while rx.try_recv().is_ok() {}

    app.open_selected_session();
    assert_eq!(app.model.view, View::SessionDetail);
    assert_eq!(rx.try_recv().unwrap(), ApiRequest::GetSession { id: 2 });
}

/// Test: Detail for a session the user left is dropped
#[test]
fn test_stale_detail_is_dropped() {
    let (mut app, _rx) = test_app();
    app.open_session(1);
    app.open_session(2);

    app.handle_api_response(ApiResponse::SessionResult {
        id: 1,
        detail: Ok(detail(1, "old", vec![shot(true, Some(90))])),
    });
    assert!(app.model.detail.detail.is_none());
    assert!(app.model.detail.state.is_loading());

    app.handle_api_response(ApiResponse::SessionResult {
        id: 2,
        detail: Ok(detail(2, "new", vec![])),
    });
    let shown = app.model.detail.detail.as_ref().unwrap();
    assert_eq!(shown.session.name, "new");
}

/// Test: Aggregates count only analyzed screenshots
#[test]
fn test_detail_stats_average_analyzed_only() {
    let (mut app, _rx) = test_app();
    app.open_session(5);
    app.handle_api_response(ApiResponse::SessionResult {
        id: 5,
        detail: Ok(detail(
            5,
            "mixed",
            vec![shot(true, Some(80)), shot(false, None), shot(true, Some(40))],
        )),
    });

    let stats = app.model.detail.stats;
    assert_eq!(stats.total, 3);
    assert_eq!(stats.analyzed_count, 2);
    assert_eq!(stats.avg_relevance, 60);
    assert!(!app.model.detail.can_analyze());
}

/// Test: An empty session averages to zero and can be analyzed
#[test]
fn test_detail_stats_empty_session() {
    let (mut app, mut rx) = test_app();
    app.open_session(9);
    app.handle_api_response(ApiResponse::SessionResult {
        id: 9,
        detail: Ok(detail(9, "fresh", vec![shot(false, None)])),
    });
    assert_eq!(app.model.detail.stats.avg_relevance, 0);
    assert!(app.model.detail.can_analyze());

    while rx.try_recv().is_ok() {}
    app.analyze_current().unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        ApiRequest::TriggerAnalysis {
            session_name: "fresh".to_string()
        }
    );
}

/// Test: A late catalog answer lands even after switching views
#[test]
fn test_late_catalog_response_updates_inactive_view() {
    let (mut app, _rx) = test_app();
    app.load_sessions();
    app.switch_view(View::Search);

    app.handle_api_response(ApiResponse::SessionsResult {
        target: CatalogTarget::Catalog,
        sessions: Ok(vec![session(3, "late", None)]),
    });

    assert_eq!(app.model.view, View::Search);
    assert_eq!(app.model.catalog.sessions.len(), 1);
    assert_eq!(app.model.catalog.state, LoadState::Loaded);
}
