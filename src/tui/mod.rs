//! Terminal User Interface module
//!
//! A full-screen console over the marketplace: catalog and departures,
//! bookings, the vendor verification queue, support tickets, coupons,
//! storefront content, and the registration wizard.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
