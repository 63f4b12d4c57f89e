//! Flowdeck dashboard server.
//!
//! A small axum application in front of `flowdeck-core`:
//! - cookie-based login (`GET`/`POST /login`) gating the control panel at `/`
//! - log tail endpoints under `/logs/` polled by the panel
//! - a manual flow trigger at `/test`, next to the background scheduler

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::{Args, ServerConfig};
pub use error::AppError;
pub use state::AppState;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Request traces at INFO so they reach the access log.
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::login::routes())
        .merge(routes::dashboard::routes())
        .merge(routes::logs::routes())
        .merge(routes::flow::routes())
        .layer(trace)
        .with_state(state)
}
