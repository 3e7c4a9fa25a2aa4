//! Route handlers for the admit card server

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use tracing::debug;

use crate::error::ServerError;
use crate::page::page_document;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "admitcard-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let config_json = state.portal.to_json()?;
    debug!("Rendering index with config {}", config_json);
    Ok(Html(page_document(&state.portal, &config_json).into_string()))
}
