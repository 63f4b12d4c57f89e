//! Log tail endpoints polled by the dashboard.

use axum::{extract::State, routing::get, Json, Router};
use flowdeck_core::logs::tail_log;
use flowdeck_core::LogSource;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Log routes: `/logs/server`, `/logs/oLogic` and `/logs/uvicorn`.
pub fn routes() -> Router<AppState> {
    LogSource::all()
        .iter()
        .fold(Router::new(), |router, &source| {
            router.route(
                &format!("/logs/{}", source.slug()),
                get(move |state: State<AppState>| handle_log(state, source)),
            )
        })
}

/// Rendered log tail.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    /// Last lines of the log, cleaned and joined with `<br>`.
    pub log: String,
}

async fn handle_log(
    State(state): State<AppState>,
    source: LogSource,
) -> Result<Json<LogResponse>, AppError> {
    let path = source.path(&state.config.log_dir);
    let log = tail_log(path, state.tail.clone()).await?;
    Ok(Json(LogResponse { log }))
}
