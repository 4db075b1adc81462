//! Test helpers for ideas-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use ideas_service::config::IdeasConfig;
use ideas_service::services::providers::TextProvider;
use ideas_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn app_with_provider(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState::new(IdeasConfig::default(), provider))
}

pub fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate_ideas")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router should not fail")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

pub const VEGAN_REQUEST: &str = r#"{"niche":"vegan cooking","successful_content_types":"recipe videos","platform_type":"Instagram Reels"}"#;
