//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CAMBIND_SECTION__KEY`)

use cambind_input::{Binding, BindingTable, CameraCommand, Capability};
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Binding table configuration
    #[serde(default)]
    pub bindings: BindingsConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CAMBIND_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CAMBIND_CAMERA__NAME=orbit -> camera.name = "orbit"
        figment = figment.merge(Env::prefixed("CAMBIND_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the effective binding table
    ///
    /// Starts from the built-in commands, applies overrides, then scales
    /// every vector by `step_scale`.
    pub fn binding_table(&self) -> Result<BindingTable, ConfigError> {
        self.bindings.build_table()
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Name the camera is registered under
    pub name: String,
    /// Priority; the highest priority camera receives input
    pub priority: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            name: "main".to_string(),
            priority: 0,
        }
    }
}

/// A single binding override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingOverride {
    /// pan, rotate or translate
    pub capability: Capability,
    /// Vector passed to the camera [x, y, z]
    pub vector: [f32; 3],
}

impl From<&BindingOverride> for Binding {
    fn from(o: &BindingOverride) -> Self {
        Binding::new(o.capability, o.vector.into())
    }
}

/// Binding table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    /// Multiplier applied to every binding vector
    pub step_scale: f32,
    /// Per-command overrides, keyed by command name
    pub overrides: BTreeMap<String, BindingOverride>,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            step_scale: 1.0,
            overrides: BTreeMap::new(),
        }
    }
}

impl BindingsConfig {
    fn build_table(&self) -> Result<BindingTable, ConfigError> {
        if !self.step_scale.is_finite() {
            return Err(ConfigError::new(format!(
                "bindings.step_scale must be finite, got {}",
                self.step_scale
            )));
        }

        let mut table = BindingTable::default();
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for (key, o) in &self.overrides {
            if key.trim().is_empty() {
                return Err(ConfigError::new("binding override with empty command name"));
            }

            // Env keys arrive lowercased; map them back to the built-in name
            let name = canonical_command_name(key);
            if let Some(other) = seen.insert(name, key.as_str()) {
                return Err(ConfigError::new(format!(
                    "binding overrides '{}' and '{}' both name {}",
                    other, key, name
                )));
            }

            if table.insert(name, Binding::from(o)).is_none() {
                log::info!("Added binding '{}'", name);
            } else {
                log::debug!("Overrode binding '{}'", name);
            }
        }

        if self.step_scale != 1.0 {
            table.scale(self.step_scale);
        }
        Ok(table)
    }
}

/// Built-in command name matching `key` ignoring case, or `key` itself
fn canonical_command_name(key: &str) -> &str {
    CameraCommand::ALL
        .into_iter()
        .map(CameraCommand::name)
        .find(|name| name.eq_ignore_ascii_case(key))
        .unwrap_or(key)
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::new(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
