//! Coupon repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Coupon, CouponId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable coupon data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CouponData {
    coupons: Vec<Coupon>,
}

/// Repository for coupon persistence
pub struct CouponRepository {
    path: PathBuf,
    data: RwLock<HashMap<CouponId, Coupon>>,
}

impl CouponRepository {
    /// Create a new coupon repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load coupons from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: CouponData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for coupon in file_data.coupons {
            data.insert(coupon.id, coupon);
        }

        Ok(())
    }

    /// Save coupons to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CouponData {
            coupons: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a coupon by ID
    pub fn get(&self, id: CouponId) -> Result<Option<Coupon>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all coupons, sorted by code
    pub fn get_all(&self) -> Result<Vec<Coupon>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut coupons: Vec<_> = data.values().cloned().collect();
        coupons.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(coupons)
    }

    /// Get a coupon by code (case-insensitive; codes are stored uppercase)
    pub fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let code_upper = code.trim().to_uppercase();
        Ok(data.values().find(|c| c.code == code_upper).cloned())
    }

    /// Check if a coupon code already exists
    pub fn code_exists(&self, code: &str) -> Result<bool, TrailheadError> {
        Ok(self.get_by_code(code)?.is_some())
    }

    /// Insert or update a coupon
    pub fn upsert(&self, coupon: Coupon) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(coupon.id, coupon);
        Ok(())
    }

    /// Delete a coupon
    pub fn delete(&self, id: CouponId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count coupons
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
    use crate::models::Discount;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CouponRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("coupons.json");
        (temp_dir, CouponRepository::new(path))
    }

    fn sample_coupon(code: &str) -> Coupon {
        Coupon::new(
            code,
            Discount::Percent(15),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        )
    }

    #[test]
    fn test_get_by_code_is_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(sample_coupon("MONSOON15")).unwrap();

        assert!(repo.get_by_code("monsoon15").unwrap().is_some());
        assert!(repo.get_by_code(" Monsoon15 ").unwrap().is_some());
        assert!(repo.get_by_code("WINTER10").unwrap().is_none());
    }

    #[test]
    fn test_code_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(sample_coupon("MONSOON15")).unwrap();
        assert!(repo.code_exists("monsoon15").unwrap());
        assert!(!repo.code_exists("OTHER").unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let coupon = sample_coupon("MONSOON15");
        let id = coupon.id;
        repo.upsert(coupon).unwrap();
        repo.save().unwrap();

        let repo2 = CouponRepository::new(temp_dir.path().join("coupons.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }
}
