//! Path management for Finance Guardian
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (passed in by the binary)
//! 2. `FINANCE_GUARDIAN_DATA_DIR` environment variable (if set)
//! 3. The platform data directory reported by `directories`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GuardianError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FINANCE_GUARDIAN_DATA_DIR";

/// Manages all paths used by Finance Guardian
#[derive(Debug, Clone)]
pub struct GuardianPaths {
    /// Base directory for all Finance Guardian data
    base_dir: PathBuf,
}

impl GuardianPaths {
    /// Create a new GuardianPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined and
    /// no override is set.
    pub fn new() -> Result<Self, GuardianError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create GuardianPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one CSV file per sheet
    pub fn workbook_dir(&self) -> PathBuf {
        self.base_dir.join("workbook")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("guardian.log")
    }

    /// Ensure the base and workbook directories exist
    pub fn ensure_directories(&self) -> Result<(), GuardianError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GuardianError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.workbook_dir()).map_err(|e| {
            GuardianError::Io(format!("Failed to create workbook directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the workbook has been initialized
    pub fn is_initialized(&self) -> bool {
        self.workbook_dir().join("users.csv").exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, GuardianError> {
    let dirs = ProjectDirs::from("com", "finance-guardian", "FinanceGuardian").ok_or_else(|| {
        GuardianError::Config("Could not determine a data directory for this platform".into())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GuardianPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.workbook_dir(), temp_dir.path().join("workbook"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("guardian.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GuardianPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.workbook_dir().exists());
        assert!(!paths.is_initialized());
    }
}
