//! User settings for Finance Guardian
//!
//! Manages the overwrite policy for existing budgets and the log level.

use serde::{Deserialize, Serialize};

use super::paths::GuardianPaths;
use crate::error::GuardianError;

/// What "New budget" does when the month already holds a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Ask the user before replacing the stored budget
    #[default]
    Confirm,
    /// Refuse; the user must delete the budget first
    Block,
}

/// User settings for Finance Guardian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Behavior when creating a budget over an existing one
    #[serde(default)]
    pub overwrite_policy: OverwritePolicy,

    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            overwrite_policy: OverwritePolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GuardianPaths) -> Result<Self, GuardianError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                GuardianError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GuardianError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GuardianPaths) -> Result<(), GuardianError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            GuardianError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GuardianError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
