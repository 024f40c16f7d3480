//! Announcement repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Announcement, AnnouncementId, Audience};

use super::file_io::{read_json, write_json_atomic};

/// Serializable announcement data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AnnouncementData {
    announcements: Vec<Announcement>,
}

/// Repository for announcement persistence
pub struct AnnouncementRepository {
    path: PathBuf,
    data: RwLock<HashMap<AnnouncementId, Announcement>>,
}

impl AnnouncementRepository {
    /// Create a new announcement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load announcements from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: AnnouncementData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for announcement in file_data.announcements {
            data.insert(announcement.id, announcement);
        }

        Ok(())
    }

    /// Save announcements to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = AnnouncementData {
            announcements: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an announcement by ID
    pub fn get(&self, id: AnnouncementId) -> Result<Option<Announcement>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all announcements, newest first
    pub fn get_all(&self) -> Result<Vec<Announcement>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut announcements: Vec<_> = data.values().cloned().collect();
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(announcements)
    }

    /// Get published announcements visible to an audience
    ///
    /// Announcements addressed to Everyone match any audience filter.
    pub fn get_published(&self, audience: Option<Audience>) -> Result<Vec<Announcement>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|a| a.is_published())
            .filter(|a| match audience {
                None => true,
                Some(aud) => a.audience == aud || a.audience == Audience::Everyone,
            })
            .collect())
    }

    /// Insert or update an announcement
    pub fn upsert(&self, announcement: Announcement) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(announcement.id, announcement);
        Ok(())
    }

    /// Delete an announcement
    pub fn delete(&self, id: AnnouncementId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count announcements
    pub fn count(&self) -> Result<usize, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AnnouncementRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("announcements.json");
        (temp_dir, AnnouncementRepository::new(path))
    }

    #[test]
    fn test_get_published_excludes_drafts() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut published = Announcement::new("Season opening", "...", Audience::Everyone);
        published.publish();
        repo.upsert(published).unwrap();
        repo.upsert(Announcement::new("Draft", "...", Audience::Everyone))
            .unwrap();

        assert_eq!(repo.get_published(None).unwrap().len(), 1);
    }

    #[test]
    fn test_everyone_matches_any_audience_filter() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut general = Announcement::new("General", "...", Audience::Everyone);
        general.publish();
        let mut vendors_only = Announcement::new("Payout schedule", "...", Audience::Vendors);
        vendors_only.publish();

        repo.upsert(general).unwrap();
        repo.upsert(vendors_only).unwrap();

        let for_vendors = repo.get_published(Some(Audience::Vendors)).unwrap();
        assert_eq!(for_vendors.len(), 2);

        let for_customers = repo.get_published(Some(Audience::Customers)).unwrap();
        assert_eq!(for_customers.len(), 1);
        assert_eq!(for_customers[0].title, "General");
    }
}
