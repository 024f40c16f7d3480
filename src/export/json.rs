//! JSON export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::{TrailheadError, TrailheadResult};

/// Write any serializable export payload as pretty-printed JSON
pub fn export_json<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> TrailheadResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| TrailheadError::Export(format!("Failed to create JSON file: {}", e)))?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, data)
        .map_err(|e| TrailheadError::Export(format!("Failed to write JSON: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchId, Booking, Money, TrekId};
    use tempfile::TempDir;

    #[test]
    fn test_export_json_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookings.json");

        let booking = Booking::new(
            BatchId::new(),
            TrekId::new(),
            "Ravi Menon",
            "ravi@example.com",
            2,
            Money::from_minor(2_400_000),
        );

        export_json(&vec![booking.clone()], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Booking> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed[0].id, booking.id);
    }
}
