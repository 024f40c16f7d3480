//! Batch service
//!
//! Scheduling and seat accounting for dated departures.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Batch, BatchId, Money, TrekId};
use crate::storage::Storage;

/// Service for batch management
pub struct BatchService<'a> {
    storage: &'a Storage,
}

/// A batch with derived seat accounting
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub batch: Batch,
    /// Per-seat price after any override
    pub effective_price: Money,
    /// Seats currently held by live bookings
    pub seats_taken: u32,
    /// Seats still available
    pub seats_left: u32,
}

impl BatchSummary {
    /// Whether the batch has no free seats
    pub fn is_full(&self) -> bool {
        self.seats_left == 0
    }
}

impl<'a> BatchService<'a> {
    /// Create a new batch service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Schedule a new departure for a trek
    pub fn schedule(
        &self,
        trek_id: TrekId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capacity: u32,
        price_override: Option<Money>,
    ) -> TrailheadResult<Batch> {
        let trek = self
            .storage
            .treks
            .get(trek_id)?
            .ok_or_else(|| TrailheadError::trek_not_found(trek_id.to_string()))?;

        if !trek.active {
            return Err(TrailheadError::Validation(format!(
                "Trek '{}' is deactivated and cannot be scheduled",
                trek.name
            )));
        }

        let mut batch = Batch::new(trek_id, start_date, end_date, capacity);
        batch.price_override = price_override;

        batch
            .validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.batches.upsert(batch.clone())?;
        self.storage.batches.save()?;

        self.storage.log_create(
            EntityType::Batch,
            batch.id.to_string(),
            Some(format!("{} {}", trek.name, batch.start_date)),
            &batch,
        )?;

        Ok(batch)
    }

    /// Get a batch by ID
    pub fn get(&self, id: BatchId) -> TrailheadResult<Option<Batch>> {
        self.storage.batches.get(id)
    }

    /// List all batches of a trek with seat accounting
    pub fn list_for_trek(&self, trek_id: TrekId) -> TrailheadResult<Vec<BatchSummary>> {
        let batches = self.storage.batches.get_by_trek(trek_id)?;
        let mut summaries = Vec::with_capacity(batches.len());

        for batch in batches {
            summaries.push(self.get_summary(&batch)?);
        }

        Ok(summaries)
    }

    /// Get a batch with derived seat accounting
    pub fn get_summary(&self, batch: &Batch) -> TrailheadResult<BatchSummary> {
        let trek_price = self
            .storage
            .treks
            .get(batch.trek_id)?
            .map(|t| t.price)
            .unwrap_or_else(Money::zero);

        let seats_taken = self.storage.bookings.seats_taken(batch.id)?;
        let seats_left = batch.capacity.saturating_sub(seats_taken);

        Ok(BatchSummary {
            effective_price: batch.effective_price(trek_price),
            seats_taken,
            seats_left,
            batch: batch.clone(),
        })
    }

    /// Close a batch to new bookings
    pub fn close(&self, id: BatchId) -> TrailheadResult<Batch> {
        let before = self
            .storage
            .batches
            .get(id)?
            .ok_or_else(|| TrailheadError::batch_not_found(id.to_string()))?;

        let mut batch = before.clone();
        batch.close();
        self.storage.batches.upsert(batch.clone())?;
        self.storage.batches.save()?;

        self.storage.log_update(
            EntityType::Batch,
            batch.id.to_string(),
            None,
            &before,
            &batch,
        )?;

        Ok(batch)
    }

    /// Cancel a batch and release every live booking on it
    pub fn cancel(&self, id: BatchId) -> TrailheadResult<Batch> {
        let before = self
            .storage
            .batches
            .get(id)?
            .ok_or_else(|| TrailheadError::batch_not_found(id.to_string()))?;

        let mut batch = before.clone();
        batch.cancel();
        self.storage.batches.upsert(batch.clone())?;
        self.storage.batches.save()?;

        for mut booking in self.storage.bookings.get_by_batch(id)? {
            if booking.holds_seats() {
                booking.cancel();
                self.storage.bookings.upsert(booking)?;
            }
        }
        self.storage.bookings.save()?;

        self.storage.log_update(
            EntityType::Batch,
            batch.id.to_string(),
            None,
            &before,
            &batch,
        )?;

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use crate::models::{Booking, Difficulty, Trek, Vendor};
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seeded_trek(storage: &Storage) -> Trek {
        let mut vendor = Vendor::new("Summit Trails", "Asha", "asha@summittrails.in");
        vendor.verify();
        let trek = Trek::new(
            vendor.id,
            "Valley of Flowers",
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_200_000),
        );
        storage.vendors.upsert(vendor).unwrap();
        storage.treks.upsert(trek.clone()).unwrap();
        trek
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_validates_dates() {
        let (_temp_dir, storage) = test_storage();
        let service = BatchService::new(&storage);
        let trek = seeded_trek(&storage);

        let err = service
            .schedule(trek.id, date(2026, 9, 17), date(2026, 9, 12), 12, None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_summary_seat_accounting() {
        let (_temp_dir, storage) = test_storage();
        let service = BatchService::new(&storage);
        let trek = seeded_trek(&storage);

        let batch = service
            .schedule(trek.id, date(2026, 9, 12), date(2026, 9, 17), 10, None)
            .unwrap();

        let booking = Booking::new(
            batch.id,
            trek.id,
            "Ravi Menon",
            "ravi@example.com",
            4,
            Money::from_minor(4_800_000),
        );
        storage.bookings.upsert(booking).unwrap();

        let summary = service.get_summary(&batch).unwrap();
        assert_eq!(summary.seats_taken, 4);
        assert_eq!(summary.seats_left, 6);
        assert!(!summary.is_full());
        assert_eq!(summary.effective_price, Money::from_minor(1_200_000));
    }

    #[test]
    fn test_price_override_takes_effect() {
        let (_temp_dir, storage) = test_storage();
        let service = BatchService::new(&storage);
        let trek = seeded_trek(&storage);

        let batch = service
            .schedule(
                trek.id,
                date(2026, 12, 20),
                date(2026, 12, 26),
                8,
                Some(Money::from_minor(1_500_000)),
            )
            .unwrap();

        let summary = service.get_summary(&batch).unwrap();
        assert_eq!(summary.effective_price, Money::from_minor(1_500_000));
    }

    #[test]
    fn test_cancel_releases_bookings() {
        let (_temp_dir, storage) = test_storage();
        let service = BatchService::new(&storage);
        let trek = seeded_trek(&storage);

        let batch = service
            .schedule(trek.id, date(2026, 9, 12), date(2026, 9, 17), 10, None)
            .unwrap();

        let booking = Booking::new(
            batch.id,
            trek.id,
            "Ravi Menon",
            "ravi@example.com",
            4,
            Money::from_minor(4_800_000),
        );
        let booking_id = booking.id;
        storage.bookings.upsert(booking).unwrap();

        service.cancel(batch.id).unwrap();

        let booking = storage.bookings.get(booking_id).unwrap().unwrap();
        assert!(!booking.holds_seats());
        assert_eq!(storage.bookings.seats_taken(batch.id).unwrap(), 0);
    }
}
