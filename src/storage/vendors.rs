//! Vendor repository for JSON storage
//!
//! Manages loading and saving vendors to vendors.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Vendor, VendorId, VerificationStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable vendor data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct VendorData {
    vendors: Vec<Vendor>,
}

/// Repository for vendor persistence
pub struct VendorRepository {
    path: PathBuf,
    data: RwLock<HashMap<VendorId, Vendor>>,
}

impl VendorRepository {
    /// Create a new vendor repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load vendors from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: VendorData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for vendor in file_data.vendors {
            data.insert(vendor.id, vendor);
        }

        Ok(())
    }

    /// Save vendors to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = VendorData {
            vendors: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a vendor by ID
    pub fn get(&self, id: VendorId) -> Result<Option<Vendor>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all vendors, sorted by company name
    pub fn get_all(&self) -> Result<Vec<Vendor>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut vendors: Vec<_> = data.values().cloned().collect();
        vendors.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(vendors)
    }

    /// Get all non-archived vendors
    pub fn get_active(&self) -> Result<Vec<Vendor>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|v| !v.archived).collect())
    }

    /// Get all vendors awaiting verification
    pub fn get_pending(&self) -> Result<Vec<Vendor>, TrailheadError> {
        let all = self.get_active()?;
        Ok(all
            .into_iter()
            .filter(|v| v.verification == VerificationStatus::Pending)
            .collect())
    }

    /// Get a vendor by company name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Vendor>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|v| v.company_name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Check if a contact email is already registered
    pub fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<VendorId>,
    ) -> Result<bool, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let email_lower = email.to_lowercase();
        Ok(data
            .values()
            .any(|v| v.email.to_lowercase() == email_lower && Some(v.id) != exclude_id))
    }

    /// Insert or update a vendor
    pub fn upsert(&self, vendor: Vendor) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(vendor.id, vendor);
        Ok(())
    }

    /// Delete a vendor
    pub fn delete(&self, id: VendorId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count vendors
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

    fn create_test_repo() -> (TempDir, VendorRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vendors.json");
        (temp_dir, VendorRepository::new(path))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let vendor = Vendor::new("Summit Trails", "Asha Rawat", "asha@summittrails.in");
        let id = vendor.id;

        repo.load().unwrap();
        repo.upsert(vendor).unwrap();
        repo.save().unwrap();

        let repo2 = VendorRepository::new(temp_dir.path().join("vendors.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.company_name, "Summit Trails");
    }

    #[test]
    fn test_get_pending_filters_verified() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let pending = Vendor::new("Pending Co", "A", "a@example.com");
        let mut verified = Vendor::new("Verified Co", "B", "b@example.com");
        verified.verify();

        repo.upsert(pending).unwrap();
        repo.upsert(verified).unwrap();

        let pending_list = repo.get_pending().unwrap();
        assert_eq!(pending_list.len(), 1);
        assert_eq!(pending_list[0].company_name, "Pending Co");
    }

    #[test]
    fn test_email_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let vendor = Vendor::new("Summit Trails", "Asha", "asha@summittrails.in");
        let id = vendor.id;
        repo.upsert(vendor).unwrap();

        assert!(repo.email_exists("ASHA@summittrails.in", None).unwrap());
        assert!(!repo.email_exists("asha@summittrails.in", Some(id)).unwrap());
        assert!(!repo.email_exists("other@example.com", None).unwrap());
    }
}
