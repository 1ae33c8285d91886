//! Router assembly for the pose detection HTTP API.
//!
//! [`build_router`] wires the handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS is permissive (browser clients call from arbitrary origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status::get_status))
        .route("/detect-poses", post(handlers::detect::detect_poses))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
