//! Binding table
//!
//! Maps command names to a (capability, vector) pair. The default table
//! carries the eight built-in commands; configuration can override them or
//! add new names.

use crate::capability::Capability;
use crate::command::CameraCommand;
use crate::error::BindingError;
use cambind_core::{CameraControl, Scene};
use cambind_math::Vec3;
use std::collections::HashMap;

/// One camera call with a fixed vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub capability: Capability,
    pub vector: Vec3,
}

impl Binding {
    pub fn new(capability: Capability, vector: Vec3) -> Self {
        Self { capability, vector }
    }

    /// Parse from engine strings, e.g. `("pan", "0 0 -1")`
    pub fn parse(capability: &str, vector: &str) -> Result<Self, BindingError> {
        Ok(Self::new(capability.parse()?, vector.parse()?))
    }

    /// Issue the camera call
    pub fn fire<C: CameraControl + ?Sized>(&self, camera: &mut C) {
        self.capability.apply(camera, self.vector);
    }
}

/// Command name to binding lookup
#[derive(Debug, Clone, PartialEq)]
pub struct BindingTable {
    bindings: HashMap<String, Binding>,
}

impl Default for BindingTable {
    /// The eight built-in camera commands
    fn default() -> Self {
        let bindings = CameraCommand::ALL
            .into_iter()
            .map(|cmd| (cmd.name().to_string(), cmd.default_binding()))
            .collect();
        Self { bindings }
    }
}

impl BindingTable {
    /// A table with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `name`, returning the binding it replaced
    pub fn insert(&mut self, name: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.bindings.insert(name.into(), binding)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    /// Multiply every binding vector by `factor`
    pub fn scale(&mut self, factor: f32) {
        for binding in self.bindings.values_mut() {
            binding.vector = binding.vector * factor;
        }
    }

    /// Bound names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run the binding for `name` against `camera`
    ///
    /// An inactive call never touches the camera. An active call issues
    /// exactly one camera call. Returns whether the camera was called.
    pub fn invoke<C: CameraControl + ?Sized>(
        &self,
        name: &str,
        active: bool,
        camera: &mut C,
    ) -> Result<bool, BindingError> {
        let binding = self.lookup(name)?;
        if !active {
            return Ok(false);
        }

        log::debug!("{} -> {}(\"{}\")", name, binding.capability, binding.vector);
        binding.fire(camera);
        Ok(true)
    }

    /// Run the binding for `name` against the scene's current camera
    ///
    /// The scene is only consulted when the call is active.
    pub fn invoke_current<C: CameraControl>(
        &self,
        name: &str,
        active: bool,
        scene: &mut Scene<C>,
    ) -> Result<bool, BindingError> {
        self.lookup(name)?;
        if !active {
            return Ok(false);
        }

        match scene.current_camera_mut() {
            Some(camera) => self.invoke(name, true, camera),
            None => {
                log::warn!("{} ignored: no active camera", name);
                Err(BindingError::NoActiveCamera)
            }
        }
    }

    fn lookup(&self, name: &str) -> Result<&Binding, BindingError> {
        self.bindings
            .get(name)
            .ok_or_else(|| BindingError::UnknownCommand(name.to_string()))
    }
}
