//! Health and readiness endpoint tests.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app_with_provider, body_json, send};
use ideas_service::config::IdeasConfig;
use ideas_service::services::providers::mock::MockTextProvider;
use ideas_service::services::providers::ProviderError;
use ideas_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = app_with_provider(Arc::new(MockTextProvider::replying("ok")));

    let response = send(app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ideas-service");
}

#[tokio::test]
async fn readiness_check_returns_ok_when_configured() {
    let app = app_with_provider(Arc::new(MockTextProvider::replying("ok")));

    let response = send(app, get("/ready")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_check_fails_without_credential() {
    let app = app_with_provider(Arc::new(MockTextProvider::failing(
        ProviderError::NotConfigured("missing".to_string()),
    )));

    let response = send(app, get("/ready")).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn application_serves_on_random_port() {
    let mut config = IdeasConfig::default();
    config.common.port = 0;

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    let response = reqwest::Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // No GEMINI_API_KEY in the default config
    let ready = reqwest::Client::new()
        .get(format!("http://127.0.0.1:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(ready.status().as_u16(), 503);
}
