//! Console system
//!
//! Owns the binding table and the scene, and executes console actions
//! against them. Output is returned as lines so the caller decides where
//! it goes.

use cambind_core::{RecordingCamera, Scene};
use cambind_input::{BindingError, BindingTable};

use crate::input::ConsoleAction;

/// Result of executing one action
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleOutcome {
    /// Keep running; print these lines
    Lines(Vec<String>),
    /// Leave the console
    Exit,
}

/// Executes console actions
pub struct ConsoleSystem {
    table: BindingTable,
    scene: Scene<RecordingCamera>,
}

impl ConsoleSystem {
    /// Create a console system over an existing table and scene
    pub fn new(table: BindingTable, scene: Scene<RecordingCamera>) -> Self {
        Self { table, scene }
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    pub fn scene(&self) -> &Scene<RecordingCamera> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<RecordingCamera> {
        &mut self.scene
    }

    /// Execute a single action
    pub fn execute(&mut self, action: ConsoleAction) -> Result<ConsoleOutcome, BindingError> {
        let lines: Vec<String> = match action {
            ConsoleAction::Invoke { command, active } => {
                if !self.table.invoke_current(&command, active, &mut self.scene)? {
                    return Ok(ConsoleOutcome::Lines(Vec::new()));
                }
                let camera = self.scene.current_camera_name().unwrap_or_default().to_string();
                self.scene
                    .current_camera()
                    .and_then(|c| c.last_call())
                    .map(|call| vec![format!("{} -> {}.{}", command, camera, call)])
                    .unwrap_or_default()
            }
            ConsoleAction::ListBindings => self
                .table
                .names()
                .into_iter()
                .filter_map(|name| {
                    self.table
                        .get(name)
                        .map(|b| format!("{:<12} {}(\"{}\")", name, b.capability, b.vector))
                })
                .collect(),
            ConsoleAction::ListCameras => {
                let current = self.scene.current_key();
                self.scene
                    .camera_names()
                    .into_iter()
                    .filter_map(|name| {
                        let key = self.scene.camera_key(name)?;
                        let priority = self.scene.priority(key)?;
                        let marker = if Some(key) == current { "*" } else { " " };
                        Some(format!("{} {} (priority {})", marker, name, priority))
                    })
                    .collect()
            }
            ConsoleAction::History => self
                .scene
                .current_camera()
                .ok_or(BindingError::NoActiveCamera)?
                .calls()
                .iter()
                .enumerate()
                .map(|(i, call)| format!("{:>4}: {}", i + 1, call))
                .collect(),
            ConsoleAction::Clear => {
                self.scene
                    .current_camera_mut()
                    .ok_or(BindingError::NoActiveCamera)?
                    .clear();
                Vec::new()
            }
            ConsoleAction::Exit => return Ok(ConsoleOutcome::Exit),
        };
        Ok(ConsoleOutcome::Lines(lines))
    }
}
