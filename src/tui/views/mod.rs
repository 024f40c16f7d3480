//! TUI views
//!
//! The top-level render function dispatches on the active view and overlays
//! the active dialog, both through exhaustive matches.

pub mod bookings;
pub mod content;
pub mod coupons;
pub mod registration;
pub mod sidebar;
pub mod status_bar;
pub mod tickets;
pub mod treks;
pub mod vendors;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Treks => treks::render(frame, app, layout.main),
        ActiveView::Bookings => bookings::render(frame, app, layout.main),
        ActiveView::Vendors => vendors::render(frame, app, layout.main),
        ActiveView::Tickets => tickets::render(frame, app, layout.main),
        ActiveView::Coupons => coupons::render(frame, app, layout.main),
        ActiveView::Content => content::render(frame, app, layout.main),
        ActiveView::Registration => registration::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::TrekForm => dialogs::trek::render(frame, app),
        ActiveDialog::BatchForm => dialogs::batch::render(frame, app),
        ActiveDialog::BookingForm => dialogs::booking::render(frame, app),
        ActiveDialog::CouponForm => dialogs::coupon::render(frame, app),
        ActiveDialog::TicketForm => dialogs::ticket::render_form(frame, app),
        ActiveDialog::TicketReply => dialogs::ticket::render_reply(frame, app),
        ActiveDialog::VendorReview => dialogs::vendor_review::render(frame, app),
        ActiveDialog::BannerForm => dialogs::banner::render(frame, app),
        ActiveDialog::AnnouncementForm => dialogs::announcement::render(frame, app),
        ActiveDialog::Confirm => dialogs::confirm::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
    }

    if let Some(ref notification) = app.notification {
        notification.render(frame, frame.area());
    }
}
