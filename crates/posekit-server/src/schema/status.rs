//! Health-check response types.

use serde::Serialize;

/// Response for the server health check.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Connection state reported to clients. Always `"connected"`.
    pub status: String,
    /// Human-readable server description.
    pub message: String,
}

impl StatusResponse {
    /// The fixed health-check payload.
    pub fn connected() -> Self {
        StatusResponse {
            status: "connected".to_string(),
            message: "Pose detection server is running".to_string(),
        }
    }
}
