//! Batch CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::Money;
use crate::services::{BatchService, TrekService};
use crate::storage::Storage;

/// Batch subcommands
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Schedule a departure for a trek
    Schedule {
        /// Trek name or ID
        trek: String,
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
        /// Seat capacity
        #[arg(short, long)]
        capacity: u32,
        /// Per-seat price override
        #[arg(short, long)]
        price: Option<String>,
    },
    /// List departures of a trek
    List {
        /// Trek name or ID
        trek: String,
    },
    /// Close a batch to new bookings
    Close {
        /// Batch ID
        batch: String,
    },
    /// Cancel a batch and release its bookings
    Cancel {
        /// Batch ID
        batch: String,
    },
}

fn parse_date(s: &str) -> TrailheadResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TrailheadError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}

/// Handle a batch command
pub fn handle_batch_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BatchCommands,
) -> TrailheadResult<()> {
    let service = BatchService::new(storage);

    match cmd {
        BatchCommands::Schedule {
            trek,
            start,
            end,
            capacity,
            price,
        } => {
            let trek_service = TrekService::new(storage);
            let trek = trek_service
                .find(&trek)?
                .ok_or_else(|| TrailheadError::trek_not_found(&trek))?;

            let price_override = match price {
                Some(p) => {
                    Some(Money::parse(&p).map_err(|e| TrailheadError::Validation(e.to_string()))?)
                }
                None => None,
            };

            let batch = service.schedule(
                trek.id,
                parse_date(&start)?,
                parse_date(&end)?,
                capacity,
                price_override,
            )?;

            println!("Scheduled departure for '{}'", trek.name);
            println!("  Dates:    {} -> {}", batch.start_date, batch.end_date);
            println!("  Capacity: {} seats", batch.capacity);
            println!("  ID:       {}", batch.id);
        }

        BatchCommands::List { trek } => {
            let trek_service = TrekService::new(storage);
            let trek = trek_service
                .find(&trek)?
                .ok_or_else(|| TrailheadError::trek_not_found(&trek))?;

            let summaries = service.list_for_trek(trek.id)?;
            if summaries.is_empty() {
                println!("No departures scheduled for '{}'.", trek.name);
            } else {
                println!("Departures for '{}':", trek.name);
                for summary in summaries {
                    println!(
                        "  {}  {} -> {}  {:>3}/{} seats free  {}  [{}]",
                        summary.batch.id,
                        summary.batch.start_date,
                        summary.batch.end_date,
                        summary.seats_left,
                        summary.batch.capacity,
                        summary
                            .effective_price
                            .format_with_symbol(&settings.currency_symbol),
                        summary.batch.status,
                    );
                }
            }
        }

        BatchCommands::Close { batch } => {
            let id = batch
                .parse()
                .map_err(|_| TrailheadError::batch_not_found(&batch))?;
            let closed = service.close(id)?;
            println!("Batch {} closed.", closed.id);
        }

        BatchCommands::Cancel { batch } => {
            let id = batch
                .parse()
                .map_err(|_| TrailheadError::batch_not_found(&batch))?;
            let cancelled = service.cancel(id)?;
            println!("Batch {} cancelled; its bookings were released.", cancelled.id);
        }
    }

    Ok(())
}
