//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod backup;
pub mod batch;
pub mod booking;
pub mod content;
pub mod coupon;
pub mod export;
pub mod ticket;
pub mod trek;
pub mod vendor;

pub use backup::{handle_backup_command, BackupCommands};
pub use batch::{handle_batch_command, BatchCommands};
pub use booking::{handle_booking_command, BookingCommands};
pub use content::{
    handle_announcement_command, handle_banner_command, AnnouncementCommands, BannerCommands,
};
pub use coupon::{handle_coupon_command, CouponCommands};
pub use export::{handle_export_command, ExportCommands};
pub use ticket::{handle_ticket_command, TicketCommands};
pub use trek::{handle_trek_command, TrekCommands};
pub use vendor::{handle_vendor_command, VendorCommands};
