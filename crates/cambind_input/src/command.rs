//! The named camera input commands
//!
//! Command names are the contract with the host's input map, which binds
//! physical keys to these names and supplies the activation value.

use crate::binding::Binding;
use crate::capability::Capability;
use crate::error::BindingError;
use cambind_core::CameraControl;
use cambind_math::Vec3;
use std::fmt;
use std::str::FromStr;

/// Built-in camera commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraCommand {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    MoveUp,
    MoveDown,
}

impl CameraCommand {
    pub const ALL: [CameraCommand; 8] = [
        CameraCommand::MoveForward,
        CameraCommand::MoveBackward,
        CameraCommand::MoveLeft,
        CameraCommand::MoveRight,
        CameraCommand::RotateLeft,
        CameraCommand::RotateRight,
        CameraCommand::MoveUp,
        CameraCommand::MoveDown,
    ];

    /// Name the input map uses for this command
    pub fn name(self) -> &'static str {
        match self {
            CameraCommand::MoveForward => "MoveForward",
            CameraCommand::MoveBackward => "MoveBackward",
            CameraCommand::MoveLeft => "MoveLeft",
            CameraCommand::MoveRight => "MoveRight",
            CameraCommand::RotateLeft => "RotateLeft",
            CameraCommand::RotateRight => "RotateRight",
            CameraCommand::MoveUp => "MoveUp",
            CameraCommand::MoveDown => "MoveDown",
        }
    }

    /// Fixed step this command applies when active
    pub fn default_binding(self) -> Binding {
        let (capability, vector) = match self {
            CameraCommand::MoveForward => (Capability::Pan, Vec3::new(0.0, 0.0, -1.0)),
            CameraCommand::MoveBackward => (Capability::Pan, Vec3::new(0.0, 0.0, 1.0)),
            CameraCommand::MoveLeft => (Capability::Pan, Vec3::new(1.0, 0.0, 0.0)),
            CameraCommand::MoveRight => (Capability::Pan, Vec3::new(-1.0, 0.0, 0.0)),
            CameraCommand::RotateLeft => (Capability::Rotate, Vec3::new(0.0, 0.1, 0.0)),
            CameraCommand::RotateRight => (Capability::Rotate, Vec3::new(0.0, -0.1, 0.0)),
            CameraCommand::MoveUp => (Capability::Translate, Vec3::new(0.0, 1.0, 0.0)),
            CameraCommand::MoveDown => (Capability::Translate, Vec3::new(0.0, -1.0, 0.0)),
        };
        Binding::new(capability, vector)
    }

    /// Run the command with its default binding
    ///
    /// Returns true if the camera was called.
    pub fn dispatch<C: CameraControl + ?Sized>(self, active: bool, camera: &mut C) -> bool {
        if !active {
            return false;
        }
        self.default_binding().fire(camera);
        true
    }
}

impl fmt::Display for CameraCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraCommand {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| BindingError::UnknownCommand(s.to_string()))
    }
}
