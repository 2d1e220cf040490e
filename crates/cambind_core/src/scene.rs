//! Scene camera registry
//!
//! The Scene owns every named camera and decides which one is current.
//! Input bindings never hold on to a camera; they ask the scene for the
//! current one each time they fire.

use crate::camera::CameraControl;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key to a camera registered in a scene
    ///
    /// Generational, so a key to a destroyed camera resolves to None even
    /// after its slot has been reused.
    pub struct CameraKey;
}

struct CameraEntry<C> {
    name: String,
    priority: i32,
    ref_count: u32,
    /// Creation order, used to break priority ties
    sequence: u64,
    camera: C,
}

/// Registry of named cameras
///
/// The current camera is the one with the highest priority. When several
/// cameras share that priority the most recently created one wins.
pub struct Scene<C: CameraControl = Box<dyn CameraControl>> {
    cameras: SlotMap<CameraKey, CameraEntry<C>>,
    next_sequence: u64,
}

impl<C: CameraControl> Default for Scene<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CameraControl> Scene<C> {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            cameras: SlotMap::with_key(),
            next_sequence: 0,
        }
    }

    /// Register a camera under `name`
    ///
    /// If a camera with that name already exists its reference count is
    /// bumped and the existing key is returned; `camera` is dropped.
    pub fn create_camera(&mut self, name: &str, priority: i32, camera: C) -> CameraKey {
        if let Some(key) = self.camera_key(name) {
            let entry = &mut self.cameras[key];
            entry.ref_count += 1;
            log::debug!("camera '{}' already exists (refs: {})", name, entry.ref_count);
            return key;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        log::info!("Created camera '{}' with priority {}", name, priority);
        self.cameras.insert(CameraEntry {
            name: name.to_string(),
            priority,
            ref_count: 1,
            sequence,
            camera,
        })
    }

    /// Look up a camera key by name
    pub fn camera_key(&self, name: &str) -> Option<CameraKey> {
        self.cameras
            .iter()
            .find(|(_, entry)| entry.name == name)
            .map(|(key, _)| key)
    }

    /// Get a camera by key
    pub fn camera(&self, key: CameraKey) -> Option<&C> {
        self.cameras.get(key).map(|e| &e.camera)
    }

    /// Get a mutable camera by key
    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut C> {
        self.cameras.get_mut(key).map(|e| &mut e.camera)
    }

    /// Get a camera by name
    pub fn camera_by_name(&self, name: &str) -> Option<&C> {
        self.camera_key(name).and_then(|key| self.camera(key))
    }

    /// Key of the current camera
    pub fn current_key(&self) -> Option<CameraKey> {
        self.cameras
            .iter()
            .max_by_key(|(_, e)| (e.priority, e.sequence))
            .map(|(key, _)| key)
    }

    /// The current camera (highest priority), if any camera exists
    pub fn current_camera(&self) -> Option<&C> {
        self.current_key().and_then(|key| self.camera(key))
    }

    /// Mutable access to the current camera
    pub fn current_camera_mut(&mut self) -> Option<&mut C> {
        let key = self.current_key()?;
        self.camera_mut(key)
    }

    /// Name of the current camera
    pub fn current_camera_name(&self) -> Option<&str> {
        self.current_key()
            .and_then(|key| self.cameras.get(key))
            .map(|e| e.name.as_str())
    }

    /// Priority of a camera
    pub fn priority(&self, key: CameraKey) -> Option<i32> {
        self.cameras.get(key).map(|e| e.priority)
    }

    /// Change a camera's priority. Returns false for an unknown key.
    pub fn set_priority(&mut self, key: CameraKey, priority: i32) -> bool {
        match self.cameras.get_mut(key) {
            Some(entry) => {
                entry.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Release one reference to a camera
    ///
    /// The camera is removed once no references remain. Returns false if
    /// the key does not name a camera.
    pub fn destroy_camera(&mut self, key: CameraKey) -> bool {
        let Some(entry) = self.cameras.get_mut(key) else {
            return false;
        };

        entry.ref_count = entry.ref_count.saturating_sub(1);
        if entry.ref_count == 0 {
            if let Some(removed) = self.cameras.remove(key) {
                log::info!("Destroyed camera '{}'", removed.name);
            }
        }
        true
    }

    /// Release one reference to the camera called `name`
    pub fn destroy_camera_by_name(&mut self, name: &str) -> bool {
        match self.camera_key(name) {
            Some(key) => self.destroy_camera(key),
            None => false,
        }
    }

    /// Names of all cameras, sorted
    pub fn camera_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cameras.values().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}
