//! Application state shared across HTTP handlers.
//!
//! [`AppState`] holds the detector backend behind an `Arc` so it can be
//! cloned into every handler task. The backend is stateless and immutable,
//! so no locking is involved.

use std::sync::Arc;

use posekit_core::{MockPoseDetector, PoseDetector};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The detection backend answering `/detect-poses` requests.
    pub detector: Arc<dyn PoseDetector>,
}

impl AppState {
    /// Creates state backed by the mock detector.
    pub fn new() -> Self {
        AppState {
            detector: Arc::new(MockPoseDetector),
        }
    }

    /// Creates state backed by an arbitrary detector (used by tests).
    pub fn with_detector(detector: Arc<dyn PoseDetector>) -> Self {
        AppState { detector }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
