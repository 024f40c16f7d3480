//! Storage initialization
//!
//! Creates the data files on first run and seeds the starter content a new
//! marketplace installation expects.

use crate::config::paths::TrailheadPaths;
use crate::error::TrailheadResult;
use crate::models::{Announcement, Audience};

use super::Storage;

/// Initialize storage for a new installation
///
/// Creates every data file (empty) and seeds a draft welcome announcement.
/// Running this against an already-initialized directory is harmless: data
/// is loaded first and only written back, and the welcome draft is only
/// added when no announcements exist yet.
pub fn initialize_storage(paths: &TrailheadPaths) -> TrailheadResult<()> {
    paths.ensure_directories()?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if storage.announcements.count()? == 0 {
        let welcome = Announcement::new(
            "Welcome to Trailhead",
            "Your marketplace console is ready. Register vendors, list treks, \
             and start taking bookings.",
            Audience::Everyone,
        );
        storage.announcements.upsert(welcome)?;
    }

    storage.save_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.vendors_file().exists());
        assert!(paths.treks_file().exists());
        assert!(paths.bookings_file().exists());
        assert!(paths.announcements_file().exists());
    }

    #[test]
    fn test_initialize_seeds_welcome_announcement_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.announcements.count().unwrap(), 1);
    }
}
