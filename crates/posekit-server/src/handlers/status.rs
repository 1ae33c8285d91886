//! Health-check handler.

use axum::Json;

use crate::schema::status::StatusResponse;

/// Reports server status.
///
/// `GET /status`
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse::connected())
}
