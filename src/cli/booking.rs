//! Booking CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::booking::{format_booking_details, format_booking_list};
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::BookingStatus;
use crate::services::booking::{BookingFilter, CreateBookingInput};
use crate::services::{BookingService, TrekService};
use crate::storage::Storage;

/// Booking subcommands
#[derive(Subcommand)]
pub enum BookingCommands {
    /// Capture a booking on an open batch
    Add {
        /// Batch ID
        batch: String,
        /// Customer name
        customer: String,
        /// Customer email
        #[arg(short, long)]
        email: String,
        /// Number of seats
        #[arg(short, long, default_value = "1")]
        seats: u32,
        /// Coupon code
        #[arg(short, long)]
        coupon: Option<String>,
    },
    /// List bookings
    List {
        /// Filter by trek name or ID
        #[arg(short, long)]
        trek: Option<String>,
        /// Filter by status (pending, confirmed, cancelled)
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by customer email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Show booking details
    Show {
        /// Booking ID
        booking: String,
    },
    /// Confirm a pending booking
    Confirm {
        /// Booking ID
        booking: String,
    },
    /// Cancel a booking and release its seats
    Cancel {
        /// Booking ID
        booking: String,
    },
}

fn parse_status(s: &str) -> TrailheadResult<BookingStatus> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        _ => Err(TrailheadError::Validation(format!(
            "Invalid status '{}'. Valid values: pending, confirmed, cancelled",
            s
        ))),
    }
}

/// Handle a booking command
pub fn handle_booking_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BookingCommands,
) -> TrailheadResult<()> {
    let service = BookingService::new(storage);

    match cmd {
        BookingCommands::Add {
            batch,
            customer,
            email,
            seats,
            coupon,
        } => {
            let batch_id = batch
                .parse()
                .map_err(|_| TrailheadError::batch_not_found(&batch))?;

            let booking = service.book(CreateBookingInput {
                batch_id,
                customer_name: customer,
                customer_email: email,
                participants: seats,
                coupon_code: coupon,
            })?;

            println!("Booking captured for {}", booking.customer_name);
            println!("  Seats:  {}", booking.participants);
            println!(
                "  Amount: {}",
                booking.amount.format_with_symbol(&settings.currency_symbol)
            );
            if let Some(code) = &booking.coupon_code {
                println!("  Coupon: {}", code);
            }
            println!("  ID:     {}", booking.id);
        }

        BookingCommands::List { trek, status, email } => {
            let trek_id = match trek {
                Some(t) => {
                    let trek_service = TrekService::new(storage);
                    Some(
                        trek_service
                            .find(&t)?
                            .ok_or_else(|| TrailheadError::trek_not_found(&t))?
                            .id,
                    )
                }
                None => None,
            };
            let status = match status {
                Some(s) => Some(parse_status(&s)?),
                None => None,
            };

            let bookings = service.list(&BookingFilter {
                trek_id,
                batch_id: None,
                status,
                email,
            })?;
            print!(
                "{}",
                format_booking_list(&bookings, &settings.currency_symbol)
            );
        }

        BookingCommands::Show { booking } => {
            let id = booking
                .parse()
                .map_err(|_| TrailheadError::booking_not_found(&booking))?;
            let found = service
                .get(id)?
                .ok_or_else(|| TrailheadError::booking_not_found(&booking))?;
            print!(
                "{}",
                format_booking_details(&found, &settings.currency_symbol)
            );
        }

        BookingCommands::Confirm { booking } => {
            let id = booking
                .parse()
                .map_err(|_| TrailheadError::booking_not_found(&booking))?;
            let confirmed = service.confirm(id)?;
            println!("Booking for '{}' confirmed.", confirmed.customer_name);
        }

        BookingCommands::Cancel { booking } => {
            let id = booking
                .parse()
                .map_err(|_| TrailheadError::booking_not_found(&booking))?;
            let cancelled = service.cancel(id)?;
            println!(
                "Booking for '{}' cancelled; {} seats released.",
                cancelled.customer_name, cancelled.participants
            );
        }
    }

    Ok(())
}
