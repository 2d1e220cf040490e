//! Camera input bindings
//!
//! Translates named input commands (`MoveForward`, `RotateLeft`, ...) into
//! a single pan, rotate or translate call on a camera.
//!
//! Default bindings:
//! - MoveForward / MoveBackward: pan along -Z / +Z
//! - MoveLeft / MoveRight: pan along +X / -X
//! - RotateLeft / RotateRight: rotate 0.1 rad about +Y / -Y
//! - MoveUp / MoveDown: translate along +Y / -Y

mod activation;
mod binding;
mod capability;
mod command;
mod error;

pub use activation::parse_activation;
pub use binding::{Binding, BindingTable};
pub use capability::Capability;
pub use command::CameraCommand;
pub use error::BindingError;
