//! Support ticket CLI commands

use clap::Subcommand;

use crate::display::ticket::{format_ticket_list, format_ticket_thread};
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::TicketStatus;
use crate::services::{TicketService, VendorService};
use crate::storage::Storage;

/// Ticket subcommands
#[derive(Subcommand)]
pub enum TicketCommands {
    /// Open a new support ticket
    Open {
        /// Short subject line
        subject: String,
        /// Description
        #[arg(short, long)]
        body: String,
        /// Requester email
        #[arg(short, long)]
        email: String,
        /// Related vendor (company name or ID)
        #[arg(short, long)]
        vendor: Option<String>,
    },
    /// List tickets
    List {
        /// Filter by status (open, in_progress, resolved, closed)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show a ticket thread
    Show {
        /// Ticket ID
        ticket: String,
    },
    /// Reply to a ticket
    Reply {
        /// Ticket ID
        ticket: String,
        /// Reply author
        #[arg(short, long, default_value = "support")]
        author: String,
        /// Reply body
        body: String,
    },
    /// Set a ticket's workflow status
    Status {
        /// Ticket ID
        ticket: String,
        /// New status (open, in_progress, resolved, closed)
        status: String,
    },
}

/// Handle a ticket command
pub fn handle_ticket_command(storage: &Storage, cmd: TicketCommands) -> TrailheadResult<()> {
    let service = TicketService::new(storage);

    match cmd {
        TicketCommands::Open {
            subject,
            body,
            email,
            vendor,
        } => {
            let vendor_id = match vendor {
                Some(v) => {
                    let vendor_service = VendorService::new(storage);
                    Some(
                        vendor_service
                            .find(&v)?
                            .ok_or_else(|| TrailheadError::vendor_not_found(&v))?
                            .id,
                    )
                }
                None => None,
            };

            let ticket = service.open(&subject, &body, &email, vendor_id)?;
            println!("Ticket opened: {}", ticket.id);
        }

        TicketCommands::List { status } => {
            let status = match status {
                Some(s) => Some(TicketStatus::parse(&s).ok_or_else(|| {
                    TrailheadError::Validation(format!(
                        "Invalid status '{}'. Valid values: open, in_progress, resolved, closed",
                        s
                    ))
                })?),
                None => None,
            };

            let tickets = service.list(status)?;
            print!("{}", format_ticket_list(&tickets));
        }

        TicketCommands::Show { ticket } => {
            let id = ticket
                .parse()
                .map_err(|_| TrailheadError::ticket_not_found(&ticket))?;
            let found = service
                .get(id)?
                .ok_or_else(|| TrailheadError::ticket_not_found(&ticket))?;
            print!("{}", format_ticket_thread(&found));
        }

        TicketCommands::Reply {
            ticket,
            author,
            body,
        } => {
            let id = ticket
                .parse()
                .map_err(|_| TrailheadError::ticket_not_found(&ticket))?;
            service.reply(id, &author, &body)?;
            println!("Reply added.");
        }

        TicketCommands::Status { ticket, status } => {
            let id = ticket
                .parse()
                .map_err(|_| TrailheadError::ticket_not_found(&ticket))?;
            let status = TicketStatus::parse(&status).ok_or_else(|| {
                TrailheadError::Validation(format!(
                    "Invalid status '{}'. Valid values: open, in_progress, resolved, closed",
                    status
                ))
            })?;

            let ticket = service.set_status(id, status)?;
            println!("Ticket '{}' is now {}.", ticket.subject, ticket.status);
        }
    }

    Ok(())
}
