//! Error types for detection backends.

use thiserror::Error;

/// Errors produced by a [`PoseDetector`](crate::detector::PoseDetector)
/// backend.
///
/// The API surfaces exactly one fault kind; anything that goes wrong inside
/// a backend is reported as a generic backend failure.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The backend failed while producing a detection.
    #[error("detection backend failure: {reason}")]
    Backend { reason: String },
}
