//! Pose detection response types.

use posekit_core::{Analysis, Detection, Pose};
use serde::Serialize;

/// Response from a pose detection request.
#[derive(Debug, Clone, Serialize)]
pub struct DetectPosesResponse {
    /// All detected poses.
    pub poses: Vec<Pose>,
    /// Summary statistics over the detected poses.
    pub analysis: Analysis,
    /// Always `true` for successful detections.
    pub success: bool,
}

impl From<Detection> for DetectPosesResponse {
    fn from(detection: Detection) -> Self {
        DetectPosesResponse {
            poses: detection.poses,
            analysis: detection.analysis,
            success: true,
        }
    }
}
