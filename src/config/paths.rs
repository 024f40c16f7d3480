//! Path management for Trailhead
//!
//! Provides platform-appropriate path resolution for configuration, data,
//! and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `TRAILHEAD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories` (e.g.
//!    `~/.config/trailhead` on Linux, `%APPDATA%\trailhead` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrailheadError;

/// Manages all paths used by Trailhead
#[derive(Debug, Clone)]
pub struct TrailheadPaths {
    /// Base directory for all Trailhead data
    base_dir: PathBuf,
}

impl TrailheadPaths {
    /// Create a new TrailheadPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user.
    pub fn new() -> Result<Self, TrailheadError> {
        let base_dir = if let Ok(custom) = std::env::var("TRAILHEAD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "trailhead").ok_or_else(|| {
                TrailheadError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TrailheadPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the in-progress registration draft
    pub fn registration_draft_file(&self) -> PathBuf {
        self.base_dir.join("registration-draft.json")
    }

    /// Get the path to vendors.json
    pub fn vendors_file(&self) -> PathBuf {
        self.data_dir().join("vendors.json")
    }

    /// Get the path to treks.json
    pub fn treks_file(&self) -> PathBuf {
        self.data_dir().join("treks.json")
    }

    /// Get the path to batches.json
    pub fn batches_file(&self) -> PathBuf {
        self.data_dir().join("batches.json")
    }

    /// Get the path to bookings.json
    pub fn bookings_file(&self) -> PathBuf {
        self.data_dir().join("bookings.json")
    }

    /// Get the path to coupons.json
    pub fn coupons_file(&self) -> PathBuf {
        self.data_dir().join("coupons.json")
    }

    /// Get the path to tickets.json
    pub fn tickets_file(&self) -> PathBuf {
        self.data_dir().join("tickets.json")
    }

    /// Get the path to banners.json
    pub fn banners_file(&self) -> PathBuf {
        self.data_dir().join("banners.json")
    }

    /// Get the path to announcements.json
    pub fn announcements_file(&self) -> PathBuf {
        self.data_dir().join("announcements.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrailheadError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrailheadError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrailheadError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| TrailheadError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if Trailhead has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("TRAILHEAD_DATA_DIR", custom_path);

        let paths = TrailheadPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("TRAILHEAD_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.treks_file(),
            temp_dir.path().join("data").join("treks.json")
        );
        assert_eq!(
            paths.registration_draft_file(),
            temp_dir.path().join("registration-draft.json")
        );
    }
}
