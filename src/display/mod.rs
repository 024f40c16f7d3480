//! Terminal output formatting
//!
//! Table views use `tabled`; detail views are hand-formatted.

pub mod booking;
pub mod ticket;
pub mod trek;
pub mod vendor;

pub use booking::{format_booking_details, format_booking_list};
pub use ticket::{format_ticket_list, format_ticket_thread};
pub use trek::{format_trek_details, format_trek_list};
pub use vendor::{format_vendor_details, format_vendor_list};
