// src/presentation/http/routes.rs
use crate::presentation::http::controllers::speakers;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, http::Method, routing::get};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/speakers", get(speakers::list_speakers))
        .route("/api/v1/speakers/paths", get(speakers::list_static_paths))
        .route(
            "/api/v1/speakers/by-slug/{slug}",
            get(speakers::get_speaker_by_slug),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
