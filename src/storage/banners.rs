//! Banner repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Banner, BannerId, BannerPlacement};

use super::file_io::{read_json, write_json_atomic};

/// Serializable banner data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BannerData {
    banners: Vec<Banner>,
}

/// Repository for banner persistence
pub struct BannerRepository {
    path: PathBuf,
    data: RwLock<HashMap<BannerId, Banner>>,
}

impl BannerRepository {
    /// Create a new banner repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load banners from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: BannerData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for banner in file_data.banners {
            data.insert(banner.id, banner);
        }

        Ok(())
    }

    /// Save banners to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BannerData {
            banners: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a banner by ID
    pub fn get(&self, id: BannerId) -> Result<Option<Banner>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all banners, ordered by placement then sort order
    pub fn get_all(&self) -> Result<Vec<Banner>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut banners: Vec<_> = data.values().cloned().collect();
        banners.sort_by(|a, b| {
            (a.placement as u8, a.sort_order, &a.title).cmp(&(b.placement as u8, b.sort_order, &b.title))
        });
        Ok(banners)
    }

    /// Get the live banners for a placement, in display order
    pub fn get_live(&self, placement: BannerPlacement) -> Result<Vec<Banner>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|b| b.active && b.placement == placement)
            .collect())
    }

    /// Insert or update a banner
    pub fn upsert(&self, banner: Banner) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(banner.id, banner);
        Ok(())
    }

    /// Delete a banner
    pub fn delete(&self, id: BannerId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count banners
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

    fn create_test_repo() -> (TempDir, BannerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("banners.json");
        (temp_dir, BannerRepository::new(path))
    }

    #[test]
    fn test_get_live_filters_placement_and_active() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut inactive = Banner::new("Old", "banners/old.png", BannerPlacement::Home);
        inactive.active = false;
        repo.upsert(inactive).unwrap();
        repo.upsert(Banner::new("Sale", "banners/sale.png", BannerPlacement::Home))
            .unwrap();
        repo.upsert(Banner::new("Promo", "banners/promo.png", BannerPlacement::Listing))
            .unwrap();

        let home = repo.get_live(BannerPlacement::Home).unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].title, "Sale");
    }

    #[test]
    fn test_sort_order_within_placement() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut second = Banner::new("Second", "b.png", BannerPlacement::Home);
        second.sort_order = 2;
        let mut first = Banner::new("First", "a.png", BannerPlacement::Home);
        first.sort_order = 1;

        repo.upsert(second).unwrap();
        repo.upsert(first).unwrap();

        let banners = repo.get_live(BannerPlacement::Home).unwrap();
        assert_eq!(banners[0].title, "First");
        assert_eq!(banners[1].title, "Second");
    }
}
