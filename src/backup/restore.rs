//! Backup restore
//!
//! Restores a backup archive over the current data directory.

use std::fs;
use std::path::Path;

use crate::config::paths::TrailheadPaths;
use crate::error::{TrailheadError, TrailheadResult};
use crate::storage::file_io::write_json_atomic;

use super::manager::BackupArchive;

/// Restore all data files from a backup archive
///
/// Existing data files are overwritten. Callers should create a fresh
/// backup first if the current state matters.
pub fn restore_backup(paths: &TrailheadPaths, backup_path: &Path) -> TrailheadResult<()> {
    let contents = fs::read_to_string(backup_path).map_err(|e| {
        TrailheadError::Backup(format!("Failed to read backup {}: {}", backup_path.display(), e))
    })?;

    let archive: BackupArchive = serde_json::from_str(&contents).map_err(|e| {
        TrailheadError::Backup(format!("Failed to parse backup {}: {}", backup_path.display(), e))
    })?;

    paths.ensure_directories()?;

    write_json_atomic(paths.vendors_file(), &archive.vendors)?;
    write_json_atomic(paths.treks_file(), &archive.treks)?;
    write_json_atomic(paths.batches_file(), &archive.batches)?;
    write_json_atomic(paths.bookings_file(), &archive.bookings)?;
    write_json_atomic(paths.coupons_file(), &archive.coupons)?;
    write_json_atomic(paths.tickets_file(), &archive.tickets)?;
    write_json_atomic(paths.banners_file(), &archive.banners)?;
    write_json_atomic(paths.announcements_file(), &archive.announcements)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::manager::BackupManager;
    use crate::config::settings::BackupRetention;
    use crate::models::Vendor;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_backup_then_restore_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        let id = vendor.id;
        storage.vendors.upsert(vendor).unwrap();
        storage.save_all().unwrap();

        let manager = BackupManager::new(paths.clone(), BackupRetention::default());
        let backup_path = manager.create_backup().unwrap();

        // Wipe the vendor and restore
        storage.vendors.delete(id).unwrap();
        storage.save_all().unwrap();

        restore_backup(&paths, &backup_path).unwrap();

        let mut restored = Storage::new(paths).unwrap();
        restored.load_all().unwrap();
        assert!(restored.vendors.get(id).unwrap().is_some());
    }
}
