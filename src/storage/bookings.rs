//! Booking repository for JSON storage
//!
//! Manages loading and saving bookings to bookings.json. Seat accounting
//! (how many seats a batch has left) is derived here from the bookings that
//! still hold seats.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrailheadError;
use crate::models::{BatchId, Booking, BookingId, BookingStatus, TrekId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable booking data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BookingData {
    bookings: Vec<Booking>,
}

/// Repository for booking persistence
pub struct BookingRepository {
    path: PathBuf,
    data: RwLock<HashMap<BookingId, Booking>>,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load bookings from disk
    pub fn load(&self) -> Result<(), TrailheadError> {
        let file_data: BookingData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for booking in file_data.bookings {
            data.insert(booking.id, booking);
        }

        Ok(())
    }

    /// Save bookings to disk
    pub fn save(&self) -> Result<(), TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BookingData {
            bookings: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a booking by ID
    pub fn get(&self, id: BookingId) -> Result<Option<Booking>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all bookings, newest first
    pub fn get_all(&self) -> Result<Vec<Booking>, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut bookings: Vec<_> = data.values().cloned().collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    /// Get all bookings on a batch
    pub fn get_by_batch(&self, batch_id: BatchId) -> Result<Vec<Booking>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.batch_id == batch_id).collect())
    }

    /// Get all bookings for a trek
    pub fn get_by_trek(&self, trek_id: TrekId) -> Result<Vec<Booking>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.trek_id == trek_id).collect())
    }

    /// Get all bookings with a given status
    pub fn get_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, TrailheadError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.status == status).collect())
    }

    /// Total seats currently held on a batch
    ///
    /// Cancelled bookings release their seats and are not counted.
    pub fn seats_taken(&self, batch_id: BatchId) -> Result<u32, TrailheadError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .filter(|b| b.batch_id == batch_id && b.holds_seats())
            .map(|b| b.participants)
            .sum())
    }

    /// Insert or update a booking
    pub fn upsert(&self, booking: Booking) -> Result<(), TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(booking.id, booking);
        Ok(())
    }

    /// Delete a booking
    pub fn delete(&self, id: BookingId) -> Result<bool, TrailheadError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrailheadError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count bookings
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
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BookingRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.json");
        (temp_dir, BookingRepository::new(path))
    }

    fn sample_booking(batch_id: BatchId, participants: u32) -> Booking {
        Booking::new(
            batch_id,
            TrekId::new(),
            "Ravi Menon",
            "ravi@example.com",
            participants,
            Money::from_minor(1_200_000),
        )
    }

    #[test]
    fn test_seats_taken_sums_participants() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let batch = BatchId::new();
        repo.upsert(sample_booking(batch, 2)).unwrap();
        repo.upsert(sample_booking(batch, 3)).unwrap();
        repo.upsert(sample_booking(BatchId::new(), 4)).unwrap();

        assert_eq!(repo.seats_taken(batch).unwrap(), 5);
    }

    #[test]
    fn test_cancelled_bookings_release_seats() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let batch = BatchId::new();
        let mut booking = sample_booking(batch, 4);
        booking.cancel();
        repo.upsert(booking).unwrap();
        repo.upsert(sample_booking(batch, 2)).unwrap();

        assert_eq!(repo.seats_taken(batch).unwrap(), 2);
    }

    #[test]
    fn test_get_by_status() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut confirmed = sample_booking(BatchId::new(), 1);
        confirmed.confirm();
        repo.upsert(confirmed).unwrap();
        repo.upsert(sample_booking(BatchId::new(), 1)).unwrap();

        assert_eq!(repo.get_by_status(BookingStatus::Confirmed).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(BookingStatus::Pending).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let booking = sample_booking(BatchId::new(), 2);
        let id = booking.id;
        repo.upsert(booking).unwrap();
        repo.save().unwrap();

        let repo2 = BookingRepository::new(temp_dir.path().join("bookings.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }
}
