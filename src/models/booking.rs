//! Booking model
//!
//! A customer booking against a batch. Amounts are computed at booking time
//! by the booking service (effective price times participants, minus any
//! coupon discount) and stored on the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BatchId, BookingId, TrekId};
use super::money::Money;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Captured but not yet confirmed
    #[default]
    Pending,
    /// Confirmed by the operator
    Confirmed,
    /// Cancelled (seats released)
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A customer booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: BookingId,

    /// Batch booked
    pub batch_id: BatchId,

    /// Trek the batch belongs to (denormalized for list filtering)
    pub trek_id: TrekId,

    /// Customer name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Number of seats booked
    pub participants: u32,

    /// Amount charged for the whole party after discounts
    pub amount: Money,

    /// Coupon code applied, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// Lifecycle state
    #[serde(default)]
    pub status: BookingStatus,

    /// When the booking was captured
    pub created_at: DateTime<Utc>,

    /// When the booking was last modified
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new pending booking
    pub fn new(
        batch_id: BatchId,
        trek_id: TrekId,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        participants: u32,
        amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BookingId::new(),
            batch_id,
            trek_id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            participants,
            amount,
            coupon_code: None,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this booking currently holds seats on its batch
    pub fn holds_seats(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Confirm this booking
    pub fn confirm(&mut self) {
        self.status = BookingStatus::Confirmed;
        self.updated_at = Utc::now();
    }

    /// Cancel this booking, releasing its seats
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Validate the booking
    pub fn validate(&self) -> Result<(), BookingValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(BookingValidationError::EmptyCustomerName);
        }
        if self.participants == 0 {
            return Err(BookingValidationError::ZeroParticipants);
        }
        if self.amount.is_negative() {
            return Err(BookingValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} ({})",
            self.customer_name, self.participants, self.status
        )
    }
}

/// Validation errors for bookings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    EmptyCustomerName,
    ZeroParticipants,
    NegativeAmount,
}

impl fmt::Display for BookingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCustomerName => write!(f, "Customer name cannot be empty"),
            Self::ZeroParticipants => write!(f, "A booking needs at least one participant"),
            Self::NegativeAmount => write!(f, "Booking amount cannot be negative"),
        }
    }
}

impl std::error::Error for BookingValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            BatchId::new(),
            TrekId::new(),
            "Ravi Menon",
            "ravi@example.com",
            2,
            Money::from_minor(2_400_000),
        )
    }

    #[test]
    fn test_new_booking_is_pending() {
        let booking = sample_booking();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.holds_seats());
    }

    #[test]
    fn test_cancel_releases_seats() {
        let mut booking = sample_booking();
        booking.cancel();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert!(!booking.holds_seats());
    }

    #[test]
    fn test_validation() {
        let mut booking = sample_booking();
        assert!(booking.validate().is_ok());

        booking.participants = 0;
        assert_eq!(
            booking.validate(),
            Err(BookingValidationError::ZeroParticipants)
        );
    }
}
