// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use snackare_core::application::services::ApplicationServices;
use snackare_core::domain::speaker::{SpeakerProvider, SpeakerRecord};
use snackare_core::infrastructure::providers::InMemorySpeakerProvider;
use snackare_core::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state(provider: Arc<dyn SpeakerProvider>, strict_slugs: bool) -> HttpState {
    let services = Arc::new(ApplicationServices::new(provider, strict_slugs));
    HttpState { services }
}

pub fn make_test_router(speakers: Vec<SpeakerRecord>) -> axum::Router {
    let provider: Arc<dyn SpeakerProvider> = Arc::new(InMemorySpeakerProvider::new(speakers));
    build_router(build_test_state(provider, false))
}

pub fn make_test_router_with(provider: Arc<dyn SpeakerProvider>, strict_slugs: bool) -> axum::Router {
    build_router(build_test_state(provider, strict_slugs))
}

/// Issues a GET and returns the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type for {uri}: {ct}"
    );

    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}
