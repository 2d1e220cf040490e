//! Camera input bindings
//!
//! Library half of the `cambind` binary: configuration loading, console
//! line mapping and the console system that runs bindings against a scene.

pub mod config;
pub mod input;
pub mod systems;
