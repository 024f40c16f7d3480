//! Trek CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::trek::{format_trek_details, format_trek_list};
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Difficulty, Money};
use crate::services::batch::BatchService;
use crate::services::trek::{CreateTrekInput, TrekFilter};
use crate::services::{TrekService, VendorService};
use crate::storage::Storage;

/// Trek subcommands
#[derive(Subcommand)]
pub enum TrekCommands {
    /// Create a new trek for a verified vendor
    Create {
        /// Owning vendor (company name or ID)
        vendor: String,
        /// Trek name
        name: String,
        /// Region or range
        #[arg(short, long)]
        region: String,
        /// Difficulty (easy, moderate, challenging, strenuous)
        #[arg(short, long, default_value = "moderate")]
        difficulty: String,
        /// Duration in days
        #[arg(long)]
        days: u32,
        /// Per-seat price (e.g. "14500" or "14500.00")
        #[arg(short, long)]
        price: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List treks
    List {
        /// Filter by region
        #[arg(short, long)]
        region: Option<String>,
        /// Filter by difficulty
        #[arg(short, long)]
        difficulty: Option<String>,
        /// Maximum per-seat price
        #[arg(long)]
        max_price: Option<String>,
        /// Substring of the trek name
        #[arg(short, long)]
        query: Option<String>,
        /// Include deactivated treks
        #[arg(short, long)]
        all: bool,
    },
    /// Show trek details and departures
    Show {
        /// Trek name or ID
        trek: String,
    },
    /// Update a trek's price or description
    Update {
        /// Trek name or ID
        trek: String,
        /// New per-seat price
        #[arg(short, long)]
        price: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Deactivate a trek
    Deactivate {
        /// Trek name or ID
        trek: String,
    },
}

/// Handle a trek command
pub fn handle_trek_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TrekCommands,
) -> TrailheadResult<()> {
    let service = TrekService::new(storage);

    match cmd {
        TrekCommands::Create {
            vendor,
            name,
            region,
            difficulty,
            days,
            price,
            description,
        } => {
            let vendor_service = VendorService::new(storage);
            let vendor = vendor_service
                .find(&vendor)?
                .ok_or_else(|| TrailheadError::vendor_not_found(&vendor))?;

            let difficulty = Difficulty::parse(&difficulty).ok_or_else(|| {
                TrailheadError::Validation(format!(
                    "Invalid difficulty: '{}'. Valid values: easy, moderate, challenging, strenuous",
                    difficulty
                ))
            })?;

            let price = Money::parse(&price)
                .map_err(|e| TrailheadError::Validation(e.to_string()))?;

            let trek = service.create(CreateTrekInput {
                vendor_id: vendor.id,
                name,
                region,
                difficulty,
                duration_days: days,
                price,
                description,
            })?;

            println!("Created trek: {}", trek.name);
            println!("  Region:   {}", trek.region);
            println!("  Price:    {}", trek.price.format_with_symbol(&settings.currency_symbol));
            println!("  ID:       {}", trek.id);
        }

        TrekCommands::List {
            region,
            difficulty,
            max_price,
            query,
            all,
        } => {
            let difficulty = match difficulty {
                Some(d) => Some(Difficulty::parse(&d).ok_or_else(|| {
                    TrailheadError::Validation(format!("Invalid difficulty: '{}'", d))
                })?),
                None => None,
            };
            let max_price = match max_price {
                Some(p) => {
                    Some(Money::parse(&p).map_err(|e| TrailheadError::Validation(e.to_string()))?)
                }
                None => None,
            };

            let treks = service.list(&TrekFilter {
                vendor_id: None,
                region,
                difficulty,
                max_price,
                query,
                include_inactive: all,
            })?;
            print!("{}", format_trek_list(&treks, &settings.currency_symbol));
        }

        TrekCommands::Show { trek } => {
            let found = service
                .find(&trek)?
                .ok_or_else(|| TrailheadError::trek_not_found(&trek))?;

            let batch_service = BatchService::new(storage);
            let batches = batch_service.list_for_trek(found.id)?;
            print!(
                "{}",
                format_trek_details(&found, &batches, &settings.currency_symbol)
            );
        }

        TrekCommands::Update {
            trek,
            price,
            description,
        } => {
            let found = service
                .find(&trek)?
                .ok_or_else(|| TrailheadError::trek_not_found(&trek))?;

            let price = match price {
                Some(p) => {
                    Some(Money::parse(&p).map_err(|e| TrailheadError::Validation(e.to_string()))?)
                }
                None => None,
            };

            let updated = service.update(found.id, price, description)?;
            println!("Trek '{}' updated.", updated.name);
        }

        TrekCommands::Deactivate { trek } => {
            let found = service
                .find(&trek)?
                .ok_or_else(|| TrailheadError::trek_not_found(&trek))?;
            let trek = service.deactivate(found.id)?;
            println!("Trek '{}' deactivated.", trek.name);
        }
    }

    Ok(())
}
