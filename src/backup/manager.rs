//! Backup manager for Trailhead
//!
//! Creates timestamped JSON archives of the whole data directory with a
//! count-based retention policy.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::TrailheadPaths;
use crate::config::settings::BackupRetention;
use crate::error::{TrailheadError, TrailheadResult};

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Backup archive format: one JSON document holding every data file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: Option<DateTime<Utc>>,
    pub vendors: serde_json::Value,
    pub treks: serde_json::Value,
    pub batches: serde_json::Value,
    pub bookings: serde_json::Value,
    pub coupons: serde_json::Value,
    pub tickets: serde_json::Value,
    pub banners: serde_json::Value,
    pub announcements: serde_json::Value,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    paths: TrailheadPaths,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: TrailheadPaths, retention: BackupRetention) -> Self {
        let backup_dir = paths.backup_dir();
        Self {
            backup_dir,
            paths,
            retention,
        }
    }

    /// Create a backup of all data
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> TrailheadResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| TrailheadError::Backup(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let filename = format!("backup-{}.json", now.format("%Y%m%d-%H%M%S"));
        let backup_path = self.backup_dir.join(&filename);

        let archive = BackupArchive {
            schema_version: 1,
            created_at: Some(now),
            vendors: read_data_file(self.paths.vendors_file())?,
            treks: read_data_file(self.paths.treks_file())?,
            batches: read_data_file(self.paths.batches_file())?,
            bookings: read_data_file(self.paths.bookings_file())?,
            coupons: read_data_file(self.paths.coupons_file())?,
            tickets: read_data_file(self.paths.tickets_file())?,
            banners: read_data_file(self.paths.banners_file())?,
            announcements: read_data_file(self.paths.announcements_file())?,
        };

        crate::storage::file_io::write_json_atomic(&backup_path, &archive)?;

        self.prune()?;

        Ok(backup_path)
    }

    /// List existing backups, newest first
    pub fn list_backups(&self) -> TrailheadResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        let entries = fs::read_dir(&self.backup_dir)
            .map_err(|e| TrailheadError::Backup(format!("Failed to read backup directory: {}", e)))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| TrailheadError::Backup(format!("Failed to read backup entry: {}", e)))?;
            let path = entry.path();
            let filename = entry.file_name().to_string_lossy().to_string();

            if !filename.starts_with("backup-") || !filename.ends_with(".json") {
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|e| TrailheadError::Backup(format!("Failed to stat backup: {}", e)))?;

            let created_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            backups.push(BackupInfo {
                filename,
                path,
                created_at,
                size_bytes: metadata.len(),
            });
        }

        backups.sort_by(|a, b| b.filename.cmp(&a.filename));
        Ok(backups)
    }

    /// Remove backups beyond the retention count, oldest first
    fn prune(&self) -> TrailheadResult<()> {
        let backups = self.list_backups()?;
        let keep = self.retention.keep_count as usize;

        for backup in backups.iter().skip(keep) {
            fs::remove_file(&backup.path)
                .map_err(|e| TrailheadError::Backup(format!("Failed to prune backup: {}", e)))?;
        }

        Ok(())
    }
}

/// Read a data file as a raw JSON value; missing files become empty objects
fn read_data_file(path: PathBuf) -> TrailheadResult<serde_json::Value> {
    if !path.exists() {
        return Ok(serde_json::json!({}));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| TrailheadError::Backup(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| TrailheadError::Backup(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_with_retention(keep_count: u32) -> (TempDir, BackupManager) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        let manager = BackupManager::new(paths, BackupRetention { keep_count });
        (temp_dir, manager)
    }

    #[test]
    fn test_create_backup() {
        let (_temp_dir, manager) = manager_with_retention(5);
        let path = manager.create_backup().unwrap();
        assert!(path.exists());

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let (_temp_dir, manager) = manager_with_retention(2);

        // Timestamped names only resolve to the second; write fakes directly
        for i in 0..4 {
            let path = manager.backup_dir.join(format!("backup-2026010{}-000000.json", i));
            std::fs::write(&path, "{}").unwrap();
        }

        manager.prune().unwrap();
        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].filename, "backup-20260103-000000.json");
    }
}
