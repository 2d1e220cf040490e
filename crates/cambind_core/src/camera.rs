//! Camera control trait

use cambind_math::Vec3;
use std::fmt;

/// Trait for camera control
///
/// Implemented by the host engine's camera. What a pan, rotate or translate
/// does to the camera is up to the implementor.
pub trait CameraControl {
    /// Move the camera relative to its own orientation
    fn pan(&mut self, delta: Vec3);
    /// Rotate the camera by euler angles (radians)
    fn rotate(&mut self, delta: Vec3);
    /// Move the camera in world space
    fn translate(&mut self, delta: Vec3);
}

impl<C: CameraControl + ?Sized> CameraControl for Box<C> {
    fn pan(&mut self, delta: Vec3) {
        (**self).pan(delta)
    }

    fn rotate(&mut self, delta: Vec3) {
        (**self).rotate(delta)
    }

    fn translate(&mut self, delta: Vec3) {
        (**self).translate(delta)
    }
}

/// One of the three camera operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraOp {
    Pan,
    Rotate,
    Translate,
}

impl CameraOp {
    /// Engine-side method name
    pub fn name(self) -> &'static str {
        match self {
            CameraOp::Pan => "pan",
            CameraOp::Rotate => "rotate",
            CameraOp::Translate => "translate",
        }
    }
}

impl fmt::Display for CameraOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded camera call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraCall {
    pub op: CameraOp,
    pub vector: Vec3,
}

impl CameraCall {
    pub fn new(op: CameraOp, vector: Vec3) -> Self {
        Self { op, vector }
    }
}

/// Formats as an engine call, e.g. `pan("0 0 -1")`
impl fmt::Display for CameraCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.op, self.vector)
    }
}
