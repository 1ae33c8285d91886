//! HTTP handler modules for the pose detection API.
//!
//! Each sub-module implements thin handlers that delegate to the detector
//! backend held in [`AppState`](crate::state::AppState) and return JSON
//! responses. No detection logic lives in handlers.

pub mod detect;
pub mod status;
