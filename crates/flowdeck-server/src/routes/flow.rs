//! Manual flow trigger.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Local;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Flow routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/test", get(test_execution))
}

/// Flow run response.
#[derive(Debug, Serialize)]
pub struct FlowResponse {
    pub message: String,
}

/// Run the flow trigger once and wait for it.
async fn test_execution(State(state): State<AppState>) -> Result<Json<FlowResponse>, AppError> {
    tracing::info!(
        requested_at = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        "starting test execution of globus flow"
    );

    let run = state.flow.run().await?;

    Ok(Json(FlowResponse {
        message: format!(
            "Test execution of Globus Flow completed at {}",
            run.completed_at.format("%Y-%m-%d %H:%M:%S")
        ),
    }))
}
