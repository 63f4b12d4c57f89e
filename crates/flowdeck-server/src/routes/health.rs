//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "flowdeck-server",
        "version": env!("CARGO_PKG_VERSION"),
        "flow": {
            "running": state.flow.is_running(),
            "scheduled": state.config.has_scheduler(),
        }
    }))
}
