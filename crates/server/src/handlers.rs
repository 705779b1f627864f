//! # Route Handlers
//!
//! The HTTP surface is deliberately thin: the library's `handle_value` is
//! already infallible at its boundary, so every request gets a structured
//! envelope and the HTTP status simply mirrors the envelope's status code.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use studykit::ResponseEnvelope;
use tracing::info;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "studykit server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/ai` endpoint.
///
/// Accepts the action request envelope as JSON and returns the canonical
/// response envelope, success or failure.
pub async fn ai_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    info!("received study request");
    let envelope = app_state.client.handle_value(payload).await;
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope))
}
