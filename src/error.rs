//! Custom error types for Trailhead
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Trailhead operations
#[derive(Error, Debug)]
pub enum TrailheadError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Booking errors (batch state, amount calculation)
    #[error("Booking error: {0}")]
    Booking(String),

    /// Coupon errors (expired, exhausted, inactive codes)
    #[error("Coupon error: {0}")]
    Coupon(String),

    /// Vendor registration wizard errors
    #[error("Registration error: {0}")]
    Registration(String),

    /// A batch has too few free seats for the requested party
    #[error("Batch is full: {seats_left} of {capacity} seats left, requested {requested}")]
    BatchFull {
        capacity: u32,
        seats_left: u32,
        requested: u32,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrailheadError {
    /// Create a "not found" error for vendors
    pub fn vendor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vendor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for treks
    pub fn trek_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Trek",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for batches
    pub fn batch_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Batch",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bookings
    pub fn booking_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Booking",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for coupons
    pub fn coupon_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Coupon",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for support tickets
    pub fn ticket_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ticket",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrailheadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrailheadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Trailhead operations
pub type TrailheadResult<T> = Result<T, TrailheadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrailheadError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrailheadError::trek_not_found("Annapurna Circuit");
        assert_eq!(err.to_string(), "Trek not found: Annapurna Circuit");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_batch_full_error() {
        let err = TrailheadError::BatchFull {
            capacity: 12,
            seats_left: 2,
            requested: 4,
        };
        assert_eq!(
            err.to_string(),
            "Batch is full: 2 of 12 seats left, requested 4"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trailhead_err: TrailheadError = io_err.into();
        assert!(matches!(trailhead_err, TrailheadError::Io(_)));
    }
}
