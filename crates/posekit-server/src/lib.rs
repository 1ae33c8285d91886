//! HTTP/JSON API server for pose detection.
//!
//! Exposes a health-check endpoint and a pose-detection endpoint backed by
//! the detector seam in `posekit-core`. This crate contains the server
//! framework, API schema types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
