//! Camera capabilities a binding can invoke

use crate::error::BindingError;
use cambind_core::{CameraControl, CameraOp};
use cambind_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which camera operation a binding calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Pan,
    Rotate,
    Translate,
}

impl Capability {
    /// Invoke this capability on `camera` exactly once
    pub fn apply<C: CameraControl + ?Sized>(self, camera: &mut C, vector: Vec3) {
        match self {
            Capability::Pan => camera.pan(vector),
            Capability::Rotate => camera.rotate(vector),
            Capability::Translate => camera.translate(vector),
        }
    }

    pub fn name(self) -> &'static str {
        CameraOp::from(self).name()
    }
}

impl From<Capability> for CameraOp {
    fn from(cap: Capability) -> Self {
        match cap {
            Capability::Pan => CameraOp::Pan,
            Capability::Rotate => CameraOp::Rotate,
            Capability::Translate => CameraOp::Translate,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pan" => Ok(Capability::Pan),
            "rotate" => Ok(Capability::Rotate),
            "translate" => Ok(Capability::Translate),
            _ => Err(BindingError::UnknownCapability(s.to_string())),
        }
    }
}
