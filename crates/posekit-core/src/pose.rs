//! Pose detection result types.
//!
//! [`Detection`] is the complete output of one detector invocation: the
//! detected poses plus a summary [`Analysis`]. Keypoints are ordered by
//! landmark convention -- index 0 is the nose, 1 the left eye, 2 the right
//! eye.

use serde::{Deserialize, Serialize};

/// A single labeled 2D landmark with a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
    /// Detector confidence for this landmark, in `[0, 1]`.
    pub score: f64,
}

impl Keypoint {
    /// Creates a keypoint at `(x, y)` with the given confidence.
    pub fn new(x: f64, y: f64, score: f64) -> Self {
        Keypoint { x, y, score }
    }
}

/// One detected pose: an ordered set of keypoints with an overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Pose identifier, unique within a single detection.
    pub id: u32,
    /// Landmarks in fixed order (nose, left eye, right eye).
    pub keypoints: Vec<Keypoint>,
    /// Overall confidence for this pose, in `[0, 1]`.
    pub score: f64,
}

/// Summary statistics for one detection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of poses in the result. Always equals the pose count of the
    /// owning [`Detection`].
    pub total_poses: usize,
    /// Aggregate confidence across all detected poses.
    pub confidence: f64,
    /// How long the detection pass took, as a display string (e.g. "0.1s").
    pub detection_time: String,
}

/// Complete result of one detector invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// All detected poses.
    pub poses: Vec<Pose>,
    /// Summary statistics over `poses`.
    pub analysis: Analysis,
}

impl Detection {
    /// Builds a detection, deriving `total_poses` from the pose count.
    pub fn new(poses: Vec<Pose>, confidence: f64, detection_time: impl Into<String>) -> Self {
        let analysis = Analysis {
            total_poses: poses.len(),
            confidence,
            detection_time: detection_time.into(),
        };
        Detection { poses, analysis }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pose(id: u32) -> Pose {
        Pose {
            id,
            keypoints: vec![Keypoint::new(10.0, 20.0, 0.5)],
            score: 0.5,
        }
    }

    #[test]
    fn detection_derives_total_poses() {
        let detection = Detection::new(vec![sample_pose(1), sample_pose(2)], 0.5, "1s");
        assert_eq!(detection.analysis.total_poses, 2);
        assert_eq!(detection.analysis.total_poses, detection.poses.len());
    }

    #[test]
    fn empty_detection_has_zero_total() {
        let detection = Detection::new(vec![], 0.0, "0s");
        assert_eq!(detection.analysis.total_poses, 0);
    }

    #[test]
    fn keypoint_wire_field_order() {
        let kp = Keypoint::new(100.0, 100.0, 0.9);
        let serialized = serde_json::to_string(&kp).unwrap();
        assert_eq!(serialized, r#"{"x":100.0,"y":100.0,"score":0.9}"#);
    }

    #[test]
    fn analysis_wire_field_order() {
        let analysis = Analysis {
            total_poses: 1,
            confidence: 0.85,
            detection_time: "0.1s".to_string(),
        };
        let serialized = serde_json::to_string(&analysis).unwrap();
        assert_eq!(
            serialized,
            r#"{"total_poses":1,"confidence":0.85,"detection_time":"0.1s"}"#
        );
    }

    #[test]
    fn detection_roundtrips_through_json() {
        let detection = Detection::new(vec![sample_pose(7)], 0.5, "2s");
        let json = serde_json::to_string(&detection).unwrap();
        let back: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detection);
    }
}
