//! Booking service
//!
//! Captures customer bookings against open batches: seat availability,
//! amount calculation, and coupon application happen here.

use chrono::Utc;

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{BatchId, Booking, BookingId, BookingStatus, TrekId};
use crate::storage::Storage;

use super::batch::BatchService;
use super::coupon::CouponService;

/// Input for capturing a booking
#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    pub batch_id: BatchId,
    pub customer_name: String,
    pub customer_email: String,
    pub participants: u32,
    pub coupon_code: Option<String>,
}

/// Filter applied in memory over loaded bookings
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub trek_id: Option<TrekId>,
    pub batch_id: Option<BatchId>,
    pub status: Option<BookingStatus>,
    /// Case-insensitive customer email match
    pub email: Option<String>,
}

impl BookingFilter {
    fn matches(&self, booking: &Booking) -> bool {
        if let Some(trek_id) = self.trek_id {
            if booking.trek_id != trek_id {
                return false;
            }
        }
        if let Some(batch_id) = self.batch_id {
            if booking.batch_id != batch_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if booking.status != status {
                return false;
            }
        }
        if let Some(ref email) = self.email {
            if !booking.customer_email.eq_ignore_ascii_case(email) {
                return false;
            }
        }
        true
    }
}

/// Service for booking capture and lifecycle
pub struct BookingService<'a> {
    storage: &'a Storage,
}

impl<'a> BookingService<'a> {
    /// Create a new booking service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Capture a booking on an open batch
    ///
    /// Amount = effective batch price x participants, minus any coupon
    /// discount, never negative. Seats are checked against live bookings.
    pub fn book(&self, input: CreateBookingInput) -> TrailheadResult<Booking> {
        if input.participants == 0 {
            return Err(TrailheadError::Validation(
                "A booking needs at least one participant".into(),
            ));
        }

        let batch_service = BatchService::new(self.storage);
        let batch = self
            .storage
            .batches
            .get(input.batch_id)?
            .ok_or_else(|| TrailheadError::batch_not_found(input.batch_id.to_string()))?;

        if !batch.is_open() {
            return Err(TrailheadError::Booking(format!(
                "Batch is {} and not taking bookings",
                batch.status
            )));
        }

        let summary = batch_service.get_summary(&batch)?;
        if summary.seats_left < input.participants {
            return Err(TrailheadError::BatchFull {
                capacity: batch.capacity,
                seats_left: summary.seats_left,
                requested: input.participants,
            });
        }

        let gross = summary.effective_price.times(input.participants);

        let (amount, coupon_code) = match input.coupon_code.as_deref() {
            Some(code) if !code.trim().is_empty() => {
                let coupon_service = CouponService::new(self.storage);
                let today = Utc::now().date_naive();
                let (discounted, canonical) = coupon_service.redeem(code, gross, today)?;
                (discounted, Some(canonical))
            }
            _ => (gross, None),
        };

        let mut booking = Booking::new(
            input.batch_id,
            batch.trek_id,
            input.customer_name.trim(),
            input.customer_email.trim(),
            input.participants,
            amount,
        );
        booking.coupon_code = coupon_code;

        booking
            .validate()
            .map_err(|e| TrailheadError::Validation(e.to_string()))?;

        self.storage.bookings.upsert(booking.clone())?;
        self.storage.bookings.save()?;

        self.storage.log_create(
            EntityType::Booking,
            booking.id.to_string(),
            Some(booking.customer_name.clone()),
            &booking,
        )?;

        Ok(booking)
    }

    /// Get a booking by ID
    pub fn get(&self, id: BookingId) -> TrailheadResult<Option<Booking>> {
        self.storage.bookings.get(id)
    }

    /// List bookings matching a filter, newest first
    pub fn list(&self, filter: &BookingFilter) -> TrailheadResult<Vec<Booking>> {
        let all = self.storage.bookings.get_all()?;
        Ok(all.into_iter().filter(|b| filter.matches(b)).collect())
    }

    /// Confirm a pending booking
    pub fn confirm(&self, id: BookingId) -> TrailheadResult<Booking> {
        let before = self
            .storage
            .bookings
            .get(id)?
            .ok_or_else(|| TrailheadError::booking_not_found(id.to_string()))?;

        if before.status == BookingStatus::Cancelled {
            return Err(TrailheadError::Booking(
                "A cancelled booking cannot be confirmed".into(),
            ));
        }

        let mut booking = before.clone();
        booking.confirm();
        self.storage.bookings.upsert(booking.clone())?;
        self.storage.bookings.save()?;

        self.storage.log_update(
            EntityType::Booking,
            booking.id.to_string(),
            Some(booking.customer_name.clone()),
            &before,
            &booking,
        )?;

        Ok(booking)
    }

    /// Cancel a booking, releasing its seats
    pub fn cancel(&self, id: BookingId) -> TrailheadResult<Booking> {
        let before = self
            .storage
            .bookings
            .get(id)?
            .ok_or_else(|| TrailheadError::booking_not_found(id.to_string()))?;

        let mut booking = before.clone();
        booking.cancel();
        self.storage.bookings.upsert(booking.clone())?;
        self.storage.bookings.save()?;

        self.storage.log_update(
            EntityType::Booking,
            booking.id.to_string(),
            Some(booking.customer_name.clone()),
            &before,
            &booking,
        )?;

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use crate::models::{Batch, Difficulty, Discount, Money, Trek, Vendor};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Verified vendor, one trek at 12000.00 per seat, one open 6-seat batch
    fn seeded_batch(storage: &Storage) -> Batch {
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
        let batch = Batch::new(trek.id, date(2026, 9, 12), date(2026, 9, 17), 6);

        storage.vendors.upsert(vendor).unwrap();
        storage.treks.upsert(trek).unwrap();
        storage.batches.upsert(batch.clone()).unwrap();
        batch
    }

    fn request(batch_id: BatchId, participants: u32, coupon: Option<&str>) -> CreateBookingInput {
        CreateBookingInput {
            batch_id,
            customer_name: "Ravi Menon".into(),
            customer_email: "ravi@example.com".into(),
            participants,
            coupon_code: coupon.map(String::from),
        }
    }

    #[test]
    fn test_book_computes_amount() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        let booking = service.book(request(batch.id, 2, None)).unwrap();
        assert_eq!(booking.amount, Money::from_minor(2_400_000));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.coupon_code.is_none());
    }

    #[test]
    fn test_book_applies_coupon() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        let coupon_service = CouponService::new(&storage);
        let today = Utc::now().date_naive();
        coupon_service
            .create("TREK10", Discount::Percent(10), today, today + chrono::Days::new(30), None)
            .unwrap();

        let booking = service.book(request(batch.id, 2, Some("trek10"))).unwrap();
        assert_eq!(booking.amount, Money::from_minor(2_160_000));
        assert_eq!(booking.coupon_code.as_deref(), Some("TREK10"));
    }

    #[test]
    fn test_book_rejects_over_capacity() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        service.book(request(batch.id, 4, None)).unwrap();

        let err = service.book(request(batch.id, 3, None)).unwrap_err();
        assert!(matches!(
            err,
            TrailheadError::BatchFull {
                seats_left: 2,
                requested: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_cancel_frees_seats_for_rebooking() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        let booking = service.book(request(batch.id, 6, None)).unwrap();
        assert!(service.book(request(batch.id, 1, None)).is_err());

        service.cancel(booking.id).unwrap();
        assert!(service.book(request(batch.id, 6, None)).is_ok());
    }

    #[test]
    fn test_book_rejects_closed_batch() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let mut batch = seeded_batch(&storage);

        batch.close();
        storage.batches.upsert(batch.clone()).unwrap();

        let err = service.book(request(batch.id, 1, None)).unwrap_err();
        assert!(matches!(err, TrailheadError::Booking(_)));
    }

    #[test]
    fn test_confirm_cancelled_booking_fails() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        let booking = service.book(request(batch.id, 1, None)).unwrap();
        service.cancel(booking.id).unwrap();

        assert!(service.confirm(booking.id).is_err());
    }

    #[test]
    fn test_list_filter_by_email_and_status() {
        let (_temp_dir, storage) = test_storage();
        let service = BookingService::new(&storage);
        let batch = seeded_batch(&storage);

        let first = service.book(request(batch.id, 1, None)).unwrap();
        let mut other = request(batch.id, 1, None);
        other.customer_email = "someone@example.com".into();
        service.book(other).unwrap();

        service.confirm(first.id).unwrap();

        let confirmed = service
            .list(&BookingFilter {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(confirmed.len(), 1);

        let by_email = service
            .list(&BookingFilter {
                email: Some("RAVI@example.com".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_email.len(), 1);
    }
}
