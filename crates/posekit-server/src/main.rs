//! Binary entrypoint for the posekit HTTP server.
//!
//! Reads configuration from environment variables:
//! - `POSEKIT_HOST`: listen address (default: "0.0.0.0")
//! - `POSEKIT_PORT`: listen port (default: "8000")

use posekit_server::router::build_router;
use posekit_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let host = std::env::var("POSEKIT_HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("POSEKIT_PORT")
        .unwrap_or_else(|_| "8000".to_string());

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    tracing::info!("pose detection server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
