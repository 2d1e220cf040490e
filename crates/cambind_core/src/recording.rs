//! Recording camera
//!
//! Stands in for a host engine camera: every call is logged and kept in
//! order so callers can inspect exactly what a binding did.

use crate::camera::{CameraCall, CameraControl, CameraOp};
use cambind_math::Vec3;

/// Camera that records the calls made against it
#[derive(Debug, Default, Clone)]
pub struct RecordingCamera {
    name: String,
    calls: Vec<CameraCall>,
}

impl RecordingCamera {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Vec::new(),
        }
    }

    /// Name used in log output
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All calls received so far, oldest first
    pub fn calls(&self) -> &[CameraCall] {
        &self.calls
    }

    /// Most recent call
    pub fn last_call(&self) -> Option<&CameraCall> {
        self.calls.last()
    }

    #[inline]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Forget recorded calls
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, op: CameraOp, vector: Vec3) {
        let call = CameraCall::new(op, vector);
        log::debug!("camera '{}': {}", self.name, call);
        self.calls.push(call);
    }
}

impl CameraControl for RecordingCamera {
    fn pan(&mut self, delta: Vec3) {
        self.record(CameraOp::Pan, delta);
    }

    fn rotate(&mut self, delta: Vec3) {
        self.record(CameraOp::Rotate, delta);
    }

    fn translate(&mut self, delta: Vec3) {
        self.record(CameraOp::Translate, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut cam = RecordingCamera::new("main");
        cam.pan(Vec3::Z);
        cam.rotate(Vec3::Y);
        cam.translate(-Vec3::Y);

        assert_eq!(cam.call_count(), 3);
        assert_eq!(cam.calls()[0], CameraCall::new(CameraOp::Pan, Vec3::Z));
        assert_eq!(cam.calls()[1], CameraCall::new(CameraOp::Rotate, Vec3::Y));
        assert_eq!(
            cam.last_call(),
            Some(&CameraCall::new(CameraOp::Translate, -Vec3::Y))
        );
    }

    #[test]
    fn test_clear() {
        let mut cam = RecordingCamera::new("main");
        cam.pan(Vec3::X);
        cam.clear();
        assert_eq!(cam.call_count(), 0);
        assert!(cam.last_call().is_none());
        assert_eq!(cam.name(), "main");
    }

    #[test]
    fn test_through_box() {
        let mut cam: Box<RecordingCamera> = Box::new(RecordingCamera::new("boxed"));
        CameraControl::pan(&mut cam, Vec3::X);
        assert_eq!(cam.call_count(), 1);
    }
}
