//! Vendor CLI commands
//!
//! Admin-console operations on vendors: the verification queue plus listing
//! and archival.

use clap::Subcommand;

use crate::display::vendor::{format_vendor_details, format_vendor_list};
use crate::error::{TrailheadError, TrailheadResult};
use crate::services::VendorService;
use crate::storage::Storage;

/// Vendor subcommands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// List vendors
    List {
        /// Show archived vendors too
        #[arg(short, long)]
        all: bool,
        /// Only vendors awaiting verification
        #[arg(short, long)]
        pending: bool,
    },
    /// Show vendor details
    Show {
        /// Company name or ID
        vendor: String,
    },
    /// Approve a pending vendor
    Verify {
        /// Company name or ID
        vendor: String,
    },
    /// Reject a pending vendor
    Reject {
        /// Company name or ID
        vendor: String,
        /// Reason shown to the vendor
        #[arg(short, long)]
        reason: String,
    },
    /// Archive a vendor and deactivate its treks
    Archive {
        /// Company name or ID
        vendor: String,
    },
}

/// Handle a vendor command
pub fn handle_vendor_command(storage: &Storage, cmd: VendorCommands) -> TrailheadResult<()> {
    let service = VendorService::new(storage);

    match cmd {
        VendorCommands::List { all, pending } => {
            let vendors = if pending {
                service.list_pending()?
            } else {
                service.list(all)?
            };

            let mut summaries = Vec::with_capacity(vendors.len());
            for vendor in &vendors {
                summaries.push(service.get_summary(vendor)?);
            }
            print!("{}", format_vendor_list(&summaries));
        }

        VendorCommands::Show { vendor } => {
            let found = service
                .find(&vendor)?
                .ok_or_else(|| TrailheadError::vendor_not_found(&vendor))?;
            print!("{}", format_vendor_details(&found));
        }

        VendorCommands::Verify { vendor } => {
            let found = service
                .find(&vendor)?
                .ok_or_else(|| TrailheadError::vendor_not_found(&vendor))?;
            let verified = service.verify(found.id)?;
            println!("Vendor '{}' verified.", verified.company_name);
        }

        VendorCommands::Reject { vendor, reason } => {
            let found = service
                .find(&vendor)?
                .ok_or_else(|| TrailheadError::vendor_not_found(&vendor))?;
            let rejected = service.reject(found.id, &reason)?;
            println!("Vendor '{}' rejected.", rejected.company_name);
        }

        VendorCommands::Archive { vendor } => {
            let found = service
                .find(&vendor)?
                .ok_or_else(|| TrailheadError::vendor_not_found(&vendor))?;
            let archived = service.archive(found.id)?;
            println!(
                "Vendor '{}' archived; its treks were deactivated.",
                archived.company_name
            );
        }
    }

    Ok(())
}
