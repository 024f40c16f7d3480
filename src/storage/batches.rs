//! Batch repository for JSON storage
//!
//! Manages loading and saving departure batches to batches.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{Batch, BatchId, TrekId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable batch data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BatchData {
    batches: Vec<Batch>,
}

/// Repository for batch persistence
pub struct BatchRepository {
    path: PathBuf,
    data: RwLock<HashMap<BatchId, Batch>>,
}

impl BatchRepository {
    /// Create a new batch repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load batches from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: BatchData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for batch in file_data.batches {
            data.insert(batch.id, batch);
        }

        Ok(())
    }

    /// Save batches to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BatchData {
            batches: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a batch by ID
    pub fn get(&self, id: BatchId) -> Result<Option<Batch>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all batches, sorted by start date
    pub fn get_all(&self) -> Result<Vec<Batch>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut batches: Vec<_> = data.values().cloned().collect();
        batches.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(batches)
    }

    /// Get all batches of a trek, sorted by start date
    pub fn get_by_trek(&self, trek_id: TrekId) -> Result<Vec<Batch>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.trek_id == trek_id).collect())
    }

    /// Get all open batches
    pub fn get_open(&self) -> Result<Vec<Batch>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.is_open()).collect())
    }

    /// Insert or update a batch
    pub fn upsert(&self, batch: Batch) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(batch.id, batch);
        Ok(())
    }

    /// Delete a batch
    pub fn delete(&self, id: BatchId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count batches
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
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BatchRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("batches.json");
        (temp_dir, BatchRepository::new(path))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_by_trek_sorted_by_start() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let trek = TrekId::new();
        repo.upsert(Batch::new(trek, date(2026, 10, 5), date(2026, 10, 10), 10))
            .unwrap();
        repo.upsert(Batch::new(trek, date(2026, 9, 12), date(2026, 9, 17), 12))
            .unwrap();
        repo.upsert(Batch::new(TrekId::new(), date(2026, 9, 1), date(2026, 9, 6), 8))
            .unwrap();

        let batches = repo.get_by_trek(trek).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].start_date, date(2026, 9, 12));
    }

    #[test]
    fn test_get_open_excludes_closed() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut closed = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);
        closed.close();
        repo.upsert(closed).unwrap();
        repo.upsert(Batch::new(TrekId::new(), date(2026, 10, 1), date(2026, 10, 6), 10))
            .unwrap();

        assert_eq!(repo.get_open().unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let batch = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);
        let id = batch.id;
        repo.upsert(batch).unwrap();
        repo.save().unwrap();

        let repo2 = BatchRepository::new(temp_dir.path().join("batches.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }
}
