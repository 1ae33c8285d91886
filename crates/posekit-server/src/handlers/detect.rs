//! Pose detection handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::detect::DetectPosesResponse;
use crate::state::AppState;

/// Detects poses in an uploaded image.
///
/// `POST /detect-poses`
///
/// The body is handed to the detector backend as-is and never inspected
/// here; the mock backend ignores it, so any payload (including none) is
/// accepted.
pub async fn detect_poses(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DetectPosesResponse>, ApiError> {
    let detection = state.detector.detect(&body)?;
    Ok(Json(DetectPosesResponse::from(detection)))
}
