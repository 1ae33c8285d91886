//! The detector seam and the mock backend.
//!
//! [`PoseDetector`] is the interface a detection backend implements. The
//! only backend today is [`MockPoseDetector`], which returns a fixed
//! single-pose result without looking at the input image.

use crate::error::DetectError;
use crate::pose::{Detection, Keypoint, Pose};

/// A pose-detection backend.
///
/// Implementations receive the raw uploaded image bytes and produce a
/// [`Detection`]. Backends are shared across request tasks, so they must be
/// `Send + Sync`.
pub trait PoseDetector: Send + Sync {
    /// Runs detection over the raw image bytes.
    fn detect(&self, image: &[u8]) -> Result<Detection, DetectError>;
}

/// Backend that returns a canned single-pose detection.
///
/// Stands in for a real inference backend. The input bytes are never read,
/// so the output is identical for every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPoseDetector;

impl MockPoseDetector {
    /// Overall confidence reported for the mock pose.
    pub const CONFIDENCE: f64 = 0.85;
    /// Detection time reported by the mock backend.
    pub const DETECTION_TIME: &'static str = "0.1s";
}

impl PoseDetector for MockPoseDetector {
    fn detect(&self, _image: &[u8]) -> Result<Detection, DetectError> {
        let pose = Pose {
            id: 1,
            keypoints: vec![
                Keypoint::new(100.0, 100.0, 0.9), // nose
                Keypoint::new(95.0, 95.0, 0.8),   // left eye
                Keypoint::new(105.0, 95.0, 0.8),  // right eye
            ],
            score: Self::CONFIDENCE,
        };
        Ok(Detection::new(
            vec![pose],
            Self::CONFIDENCE,
            Self::DETECTION_TIME,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_single_pose_with_three_keypoints() {
        let detection = MockPoseDetector.detect(&[]).unwrap();
        assert_eq!(detection.poses.len(), 1);

        let pose = &detection.poses[0];
        assert_eq!(pose.id, 1);
        assert_eq!(pose.score, 0.85);
        assert_eq!(
            pose.keypoints,
            vec![
                Keypoint::new(100.0, 100.0, 0.9),
                Keypoint::new(95.0, 95.0, 0.8),
                Keypoint::new(105.0, 95.0, 0.8),
            ]
        );
    }

    #[test]
    fn mock_analysis_is_consistent_with_poses() {
        let detection = MockPoseDetector.detect(&[]).unwrap();
        assert_eq!(detection.analysis.total_poses, detection.poses.len());
        assert_eq!(detection.analysis.confidence, 0.85);
        assert_eq!(detection.analysis.detection_time, "0.1s");
    }

    #[test]
    fn mock_output_is_invariant_to_input() {
        let from_empty = MockPoseDetector.detect(&[]).unwrap();
        let from_garbage = MockPoseDetector.detect(b"\xde\xad\xbe\xef").unwrap();
        assert_eq!(from_empty, from_garbage);
    }
}
