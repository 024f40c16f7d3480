//! Data export
//!
//! Bookings and treks can be exported as CSV, JSON, or YAML.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_bookings_csv, export_treks_csv};
pub use json::export_json;
pub use yaml::export_yaml;

use std::path::Path;

use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Booking, Trek};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Parse a format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Export bookings in the requested format
pub fn export_bookings<P: AsRef<Path>>(
    bookings: &[Booking],
    format: ExportFormat,
    path: P,
) -> TrailheadResult<()> {
    match format {
        ExportFormat::Csv => export_bookings_csv(bookings, path),
        ExportFormat::Json => export_json(&bookings, path),
        ExportFormat::Yaml => export_yaml(&bookings, path),
    }
}

/// Export treks in the requested format
pub fn export_treks<P: AsRef<Path>>(
    treks: &[Trek],
    format: ExportFormat,
    path: P,
) -> TrailheadResult<()> {
    match format {
        ExportFormat::Csv => export_treks_csv(treks, path),
        ExportFormat::Json => export_json(&treks, path),
        ExportFormat::Yaml => export_yaml(&treks, path),
    }
}

/// Parse a format string or produce an export error
pub fn parse_format(s: &str) -> TrailheadResult<ExportFormat> {
    ExportFormat::parse(s).ok_or_else(|| {
        TrailheadError::Export(format!(
            "Unknown export format '{}'. Valid formats: csv, json, yaml",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("yml"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert!(parse_format("xml").is_err());
    }
}
