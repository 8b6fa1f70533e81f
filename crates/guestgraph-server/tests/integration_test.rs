//! HTTP-level tests for the dashboard routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use guestgraph_common::{AppearanceTable, GuestAppearanceRecord, SeasonNumber};
use guestgraph_config::ChartConfig;
use guestgraph_server::{router, AppContext};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn record(person: &str, season: Option<u32>, episode: &str) -> GuestAppearanceRecord {
    GuestAppearanceRecord::new(person, season.map(SeasonNumber), episode)
}

fn test_router() -> axum::Router {
    let table = AppearanceTable::new(vec![
        record("Randy", Some(1), "Ep1"),
        record("Randy", Some(1), "Ep1"),
        record("Randy", Some(1), "Ep2"),
        record("Cartman", Some(2), "Ep3"),
    ]);
    router(Arc::new(AppContext::new(table, &ChartConfig::default())))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_index_serves_page_with_season_options() {
    let (status, body) = get("/").await;
    let page = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("id=\"season-filter\""));
    assert!(page.contains("<option value=\"1\">1</option>"));
    assert!(page.contains("<option value=\"2\">2</option>"));
}

#[tokio::test]
async fn test_seasons_endpoint_lists_distinct_seasons() {
    let (status, body) = get("/api/seasons").await;

    assert_eq!(status, StatusCode::OK);
    let seasons: Vec<u32> = serde_json::from_slice(&body).unwrap();
    assert_eq!(seasons, vec![1, 2]);
}

#[tokio::test]
async fn test_top_guests_unfiltered() {
    let (status, body) = get("/api/top-guests").await;

    assert_eq!(status, StatusCode::OK);
    let guests: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(guests[0]["person_name"], "Randy");
    assert_eq!(guests[0]["episode_count"], 2);
    assert_eq!(guests[1]["person_name"], "Cartman");
    assert_eq!(guests[1]["episode_count"], 1);
}

#[tokio::test]
async fn test_top_guests_filtered_by_season() {
    let (status, body) = get("/api/top-guests?seasons=2").await;

    assert_eq!(status, StatusCode::OK);
    let guests: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(guests.as_array().unwrap().len(), 1);
    assert_eq!(guests[0]["person_name"], "Cartman");
}

#[tokio::test]
async fn test_top_guests_absent_season_is_empty() {
    let (status, body) = get("/api/top-guests?seasons=99").await;

    assert_eq!(status, StatusCode::OK);
    let guests: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(guests.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chart_endpoint_returns_spec() {
    let (status, body) = get("/api/chart?seasons=1").await;

    assert_eq!(status, StatusCode::OK);
    let spec: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(spec["title"], "Top 10 Guests by Episode Count");
    assert_eq!(spec["x_axis_title"], "Episode Count");
    assert_eq!(spec["bars"][0]["label"], "Randy");
    assert_eq!(spec["bars"][0]["value"], 2);
}

#[tokio::test]
async fn test_invalid_seasons_parameter_is_bad_request() {
    let (status, _) = get("/api/top-guests?seasons=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
