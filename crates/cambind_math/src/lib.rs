//! Math types for camera bindings
//!
//! - [`Vec3`] - 3D vector with x, y, z components, parseable from the
//!   engine's `"x y z"` string form

mod vec3;

pub use vec3::{ParseVec3Error, Vec3};
