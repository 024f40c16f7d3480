//! CSV export
//!
//! Flattens bookings and treks into spreadsheet-friendly rows.

use std::path::Path;

use serde::Serialize;

use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Booking, Trek};

#[derive(Serialize)]
struct BookingCsvRow<'a> {
    id: String,
    trek_id: String,
    batch_id: String,
    customer_name: &'a str,
    customer_email: &'a str,
    participants: u32,
    amount: String,
    coupon_code: &'a str,
    status: String,
    created_at: String,
}

#[derive(Serialize)]
struct TrekCsvRow<'a> {
    id: String,
    name: &'a str,
    region: &'a str,
    difficulty: String,
    duration_days: u32,
    price: String,
    active: bool,
}

/// Write bookings as CSV
pub fn export_bookings_csv<P: AsRef<Path>>(bookings: &[Booking], path: P) -> TrailheadResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| TrailheadError::Export(format!("Failed to create CSV file: {}", e)))?;

    for booking in bookings {
        let row = BookingCsvRow {
            id: booking.id.to_string(),
            trek_id: booking.trek_id.to_string(),
            batch_id: booking.batch_id.to_string(),
            customer_name: &booking.customer_name,
            customer_email: &booking.customer_email,
            participants: booking.participants,
            amount: booking.amount.to_string(),
            coupon_code: booking.coupon_code.as_deref().unwrap_or(""),
            status: booking.status.to_string(),
            created_at: booking.created_at.to_rfc3339(),
        };
        writer
            .serialize(row)
            .map_err(|e| TrailheadError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrailheadError::Export(format!("Failed to flush CSV file: {}", e)))?;

    Ok(())
}

/// Write treks as CSV
pub fn export_treks_csv<P: AsRef<Path>>(treks: &[Trek], path: P) -> TrailheadResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| TrailheadError::Export(format!("Failed to create CSV file: {}", e)))?;

    for trek in treks {
        let row = TrekCsvRow {
            id: trek.id.to_string(),
            name: &trek.name,
            region: &trek.region,
            difficulty: trek.difficulty.to_string(),
            duration_days: trek.duration_days,
            price: trek.price.to_string(),
            active: trek.active,
        };
        writer
            .serialize(row)
            .map_err(|e| TrailheadError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrailheadError::Export(format!("Failed to flush CSV file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchId, Money, TrekId};
    use tempfile::TempDir;

    #[test]
    fn test_export_bookings_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.csv");

        let booking = Booking::new(
            BatchId::new(),
            TrekId::new(),
            "Ravi Menon",
            "ravi@example.com",
            2,
            Money::from_minor(2_400_000),
        );

        export_bookings_csv(&[booking], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("id,trek_id,batch_id,customer_name"));
        assert!(contents.contains("Ravi Menon"));
        assert!(contents.contains("24000.00"));
    }

    #[test]
    fn test_export_empty_is_header_only_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("treks.csv");

        export_treks_csv(&[], &path).unwrap();
        assert!(path.exists());
    }
}
