//! Camera seam between input bindings and the host engine
//!
//! ## Core Types
//!
//! - [`CameraControl`] - the three camera operations a binding can invoke
//! - [`Scene`] - registry of named cameras; resolves the current camera
//! - [`RecordingCamera`] - a camera that records every call it receives

mod camera;
mod recording;
mod scene;

pub use camera::{CameraCall, CameraControl, CameraOp};
pub use recording::RecordingCamera;
pub use scene::{CameraKey, Scene};
