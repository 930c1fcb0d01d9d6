//! Integration tests for the private provider hop (`/today`).

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pokeday::dataset::Dataset;
use pokeday::routes::{UpstreamState, upstream_router};
use pokeday_core::PokemonRecord;

fn record(name: &str, color: &str) -> PokemonRecord {
    PokemonRecord {
        name: name.to_string(),
        color: color.to_string(),
        types: vec!["Electric".to_string()],
        normal_url: "https://img.example/n.png".to_string(),
        shiny_url: "https://img.example/s.png".to_string(),
    }
}

fn router_with(records: HashMap<u32, PokemonRecord>) -> axum::Router {
    upstream_router(UpstreamState {
        dataset: Arc::new(Dataset::from_records(records)),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_today_serves_current_day_entry() {
    let today = Utc::now().date_naive().ordinal();
    let app = router_with(HashMap::from([(today, record("Pikachu", "yellow"))]));

    let response = app
        .oneshot(Request::builder().uri("/today").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Pikachu");
    assert_eq!(json["color"], "yellow");
    assert_eq!(json["day_of_year"], today);
}

#[tokio::test]
async fn test_today_with_empty_dataset_is_503() {
    let app = router_with(HashMap::new());

    let response = app
        .oneshot(Request::builder().uri("/today").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_today_with_missing_day_is_404() {
    // A day key that is never today's ordinal, and never day 1 so the
    // leap-day fallback cannot kick in either.
    let today = Utc::now().date_naive().ordinal();
    let other_day = if today <= 2 { 3 } else { 2 };
    let app = router_with(HashMap::from([(other_day, record("Bulbasaur", "green"))]));

    let response = app
        .oneshot(Request::builder().uri("/today").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_index_reports_service_info() {
    let app = router_with(HashMap::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["today_endpoint"], "/today");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(HashMap::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
