//! Audit logger for append-only audit log
//!
//! Each entry is written as a single JSON line (JSONL) and flushed
//! immediately.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrailheadError, TrailheadResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an audit entry
    pub fn log(&self, entry: &AuditEntry) -> TrailheadResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrailheadError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrailheadError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrailheadError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrailheadError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all entries from the audit log, oldest first
    ///
    /// Lines that fail to parse are skipped rather than failing the read.
    pub fn read_all(&self) -> TrailheadResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.log_path)
            .map_err(|e| TrailheadError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line =
                line.map_err(|e| TrailheadError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<AuditEntry>(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::EntityType;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_log_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let entry = AuditEntry::create(
            EntityType::Vendor,
            "ven-12345678",
            Some("Summit Trails".into()),
            &json!({"company_name": "Summit Trails"}),
        );
        logger.log(&entry).unwrap();
        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_id, "ven-12345678");
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        std::fs::write(&path, "not json\n").unwrap();

        let logger = AuditLogger::new(path);
        let entry = AuditEntry::delete(EntityType::Banner, "bnr-12345678", None, &json!({}));
        logger.log(&entry).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 1);
    }
}
