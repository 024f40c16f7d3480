//! Trek repository for JSON storage
//!
//! Manages loading and saving treks to treks.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Trek, TrekId, VendorId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable trek data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TrekData {
    treks: Vec<Trek>,
}

/// Repository for trek persistence
pub struct TrekRepository {
    path: PathBuf,
    data: RwLock<HashMap<TrekId, Trek>>,
}

impl TrekRepository {
    /// Create a new trek repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load treks from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: TrekData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for trek in file_data.treks {
            data.insert(trek.id, trek);
        }

        Ok(())
    }

    /// Save treks to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TrekData {
            treks: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a trek by ID
    pub fn get(&self, id: TrekId) -> Result<Option<Trek>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all treks, sorted by name
    pub fn get_all(&self) -> Result<Vec<Trek>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut treks: Vec<_> = data.values().cloned().collect();
        treks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(treks)
    }

    /// Get all active treks
    pub fn get_active(&self) -> Result<Vec<Trek>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.active).collect())
    }

    /// Get all treks owned by a vendor
    pub fn get_by_vendor(&self, vendor_id: VendorId) -> Result<Vec<Trek>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.vendor_id == vendor_id).collect())
    }

    /// Get a trek by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Trek>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|t| t.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Check if a trek name is already taken
    pub fn name_exists(&self, name: &str, exclude_id: Option<TrekId>) -> Result<bool, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|t| t.name.to_lowercase() == name_lower && Some(t.id) != exclude_id))
    }

    /// Insert or update a trek
    pub fn upsert(&self, trek: Trek) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(trek.id, trek);
        Ok(())
    }

    /// Delete a trek
    pub fn delete(&self, id: TrekId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count treks
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
    use crate::models::{Difficulty, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TrekRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("treks.json");
        (temp_dir, TrekRepository::new(path))
    }

    fn sample_trek(vendor_id: VendorId, name: &str) -> Trek {
        Trek::new(
            vendor_id,
            name,
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_450_000),
        )
    }

    #[test]
    fn test_get_by_vendor() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let vendor_a = VendorId::new();
        let vendor_b = VendorId::new();
        repo.upsert(sample_trek(vendor_a, "Valley of Flowers")).unwrap();
        repo.upsert(sample_trek(vendor_a, "Kedarkantha")).unwrap();
        repo.upsert(sample_trek(vendor_b, "Sandakphu")).unwrap();

        assert_eq!(repo.get_by_vendor(vendor_a).unwrap().len(), 2);
        assert_eq!(repo.get_by_vendor(vendor_b).unwrap().len(), 1);
    }

    #[test]
    fn test_get_active_filters_deactivated() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut trek = sample_trek(VendorId::new(), "Valley of Flowers");
        trek.deactivate();
        repo.upsert(trek).unwrap();
        repo.upsert(sample_trek(VendorId::new(), "Kedarkantha")).unwrap();

        let active = repo.get_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Kedarkantha");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let trek = sample_trek(VendorId::new(), "Valley of Flowers");
        let id = trek.id;
        repo.upsert(trek).unwrap();
        repo.save().unwrap();

        let repo2 = TrekRepository::new(temp_dir.path().join("treks.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }

    #[test]
    fn test_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let trek = sample_trek(VendorId::new(), "Valley of Flowers");
        let id = trek.id;
        repo.upsert(trek).unwrap();

        assert!(repo.name_exists("valley of flowers", None).unwrap());
        assert!(!repo.name_exists("valley of flowers", Some(id)).unwrap());
    }
}
