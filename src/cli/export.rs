//! Export CLI commands

use clap::Subcommand;

use crate::error::TrailheadResult;
use crate::export::{export_bookings, export_treks, parse_format};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all bookings
    Bookings {
        /// Output file
        file: String,
        /// Format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
    /// Export the trek catalog
    Treks {
        /// Output file
        file: String,
        /// Format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrailheadResult<()> {
    match cmd {
        ExportCommands::Bookings { file, format } => {
            let format = parse_format(&format)?;
            let bookings = storage.bookings.get_all()?;
            export_bookings(&bookings, format, &file)?;
            println!("Exported {} bookings to {}.", bookings.len(), file);
        }

        ExportCommands::Treks { file, format } => {
            let format = parse_format(&format)?;
            let treks = storage.treks.get_all()?;
            export_treks(&treks, format, &file)?;
            println!("Exported {} treks to {}.", treks.len(), file);
        }
    }

    Ok(())
}
