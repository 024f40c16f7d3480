//! YAML export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::{TrailheadError, TrailheadResult};

/// Write any serializable export payload as YAML
pub fn export_yaml<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> TrailheadResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| TrailheadError::Export(format!("Failed to create YAML file: {}", e)))?;

    let writer = BufWriter::new(file);
    serde_yaml::to_writer(writer, data)
        .map_err(|e| TrailheadError::Export(format!("Failed to write YAML: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Money, Trek, VendorId};
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("treks.yaml");

        let trek = Trek::new(
            VendorId::new(),
            "Valley of Flowers",
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_450_000),
        );

        export_yaml(&vec![trek], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Valley of Flowers"));
    }
}
