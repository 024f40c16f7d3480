//! Batch model
//!
//! A batch is a dated departure of a trek with a fixed seat capacity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BatchId, TrekId};
use super::money::Money;

/// Lifecycle state of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Accepting bookings
    #[default]
    Open,
    /// Closed by the vendor (no new bookings, existing ones stand)
    Closed,
    /// Cancelled (existing bookings released)
    Cancelled,
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A dated departure of a trek
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Unique identifier
    pub id: BatchId,

    /// Trek this batch departs for
    pub trek_id: TrekId,

    /// First day of the departure
    pub start_date: NaiveDate,

    /// Last day of the departure
    pub end_date: NaiveDate,

    /// Total seats
    pub capacity: u32,

    /// Per-seat price override; falls back to the trek price when None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override: Option<Money>,

    /// Lifecycle state
    #[serde(default)]
    pub status: BatchStatus,

    /// When the batch was created
    pub created_at: DateTime<Utc>,

    /// When the batch was last modified
    pub updated_at: DateTime<Utc>,
}

impl Batch {
    /// Create a new open batch
    pub fn new(trek_id: TrekId, start_date: NaiveDate, end_date: NaiveDate, capacity: u32) -> Self {
        let now = Utc::now();
        Self {
            id: BatchId::new(),
            trek_id,
            start_date,
            end_date,
            capacity,
            price_override: None,
            status: BatchStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    /// The effective per-seat price given the trek's base price
    pub fn effective_price(&self, trek_price: Money) -> Money {
        self.price_override.unwrap_or(trek_price)
    }

    /// Whether the batch accepts new bookings
    pub fn is_open(&self) -> bool {
        self.status == BatchStatus::Open
    }

    /// Close the batch to new bookings
    pub fn close(&mut self) {
        self.status = BatchStatus::Closed;
        self.updated_at = Utc::now();
    }

    /// Cancel the batch
    pub fn cancel(&mut self) {
        self.status = BatchStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Validate the batch
    pub fn validate(&self) -> Result<(), BatchValidationError> {
        if self.capacity == 0 {
            return Err(BatchValidationError::ZeroCapacity);
        }
        if self.end_date < self.start_date {
            return Err(BatchValidationError::EndsBeforeStart);
        }
        Ok(())
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} ({} seats, {})",
            self.start_date, self.end_date, self.capacity, self.status
        )
    }
}

/// Validation errors for batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchValidationError {
    ZeroCapacity,
    EndsBeforeStart,
}

impl fmt::Display for BatchValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "Batch capacity must be at least 1"),
            Self::EndsBeforeStart => write!(f, "Batch end date cannot be before start date"),
        }
    }
}

impl std::error::Error for BatchValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_batch_is_open() {
        let batch = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);
        assert!(batch.is_open());
        assert_eq!(batch.capacity, 12);
    }

    #[test]
    fn test_effective_price() {
        let mut batch = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);
        let base = Money::from_minor(1_200_000);

        assert_eq!(batch.effective_price(base), base);

        batch.price_override = Some(Money::from_minor(1_500_000));
        assert_eq!(batch.effective_price(base), Money::from_minor(1_500_000));
    }

    #[test]
    fn test_close_and_cancel() {
        let mut batch = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);

        batch.close();
        assert_eq!(batch.status, BatchStatus::Closed);
        assert!(!batch.is_open());

        batch.cancel();
        assert_eq!(batch.status, BatchStatus::Cancelled);
    }

    #[test]
    fn test_validation() {
        let mut batch = Batch::new(TrekId::new(), date(2026, 9, 12), date(2026, 9, 17), 12);
        assert!(batch.validate().is_ok());

        batch.capacity = 0;
        assert_eq!(batch.validate(), Err(BatchValidationError::ZeroCapacity));

        batch.capacity = 12;
        batch.end_date = date(2026, 9, 1);
        assert_eq!(batch.validate(), Err(BatchValidationError::EndsBeforeStart));
    }
}
