//! Event handler for the TUI
//!
//! Routes keyboard events to dialogs, the registration wizard, or the
//! active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::models::TicketStatus;
use crate::services::{ContentService, TicketService, TrekService, VendorService};

use super::app::{select_next, select_prev, ActiveDialog, ActiveView, App, ContentTab};
use super::dialogs;
use super::dialogs::confirm::ConfirmAction;
use super::event::Event;
use super::views;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs capture all input first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    // The registration wizard owns its keys entirely (text entry)
    if app.active_view == ActiveView::Registration {
        views::registration::handle_key(app, key);
        return Ok(());
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            app.switch_view(ActiveView::ALL[index]);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Treks => handle_treks_key(app, key),
        ActiveView::Bookings => handle_bookings_key(app, key),
        ActiveView::Vendors => handle_vendors_key(app, key),
        ActiveView::Tickets => handle_tickets_key(app, key),
        ActiveView::Coupons => handle_coupons_key(app, key),
        ActiveView::Content => handle_content_key(app, key),
        ActiveView::Registration => {}
    }

    Ok(())
}

/// Route a key to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::TrekForm => {
            dialogs::trek::handle_key(app, key);
        }
        ActiveDialog::BatchForm => {
            dialogs::batch::handle_key(app, key);
        }
        ActiveDialog::BookingForm => {
            dialogs::booking::handle_key(app, key);
        }
        ActiveDialog::CouponForm => {
            dialogs::coupon::handle_key(app, key);
        }
        ActiveDialog::TicketForm => {
            dialogs::ticket::handle_form_key(app, key);
        }
        ActiveDialog::TicketReply => {
            dialogs::ticket::handle_reply_key(app, key);
        }
        ActiveDialog::VendorReview => {
            dialogs::vendor_review::handle_key(app, key);
        }
        ActiveDialog::BannerForm => {
            dialogs::banner::handle_key(app, key);
        }
        ActiveDialog::AnnouncementForm => {
            dialogs::announcement::handle_key(app, key);
        }
        ActiveDialog::Confirm => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::Help => {
            dialogs::help::handle_key(app, key);
        }
    }
}

fn handle_treks_key(app: &mut App, key: KeyEvent) {
    let trek_count = views::treks::visible_treks(app).len();
    let batch_count = views::treks::selected_trek_batches(app).len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_trek_index = select_next(app.selected_trek_index, trek_count);
            app.selected_batch_index = 0;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_trek_index = select_prev(app.selected_trek_index);
            app.selected_batch_index = 0;
        }
        KeyCode::Char('J') => {
            app.selected_batch_index = select_next(app.selected_batch_index, batch_count);
        }
        KeyCode::Char('K') => {
            app.selected_batch_index = select_prev(app.selected_batch_index);
        }

        KeyCode::Char('a') => {
            app.trek_form = dialogs::trek::TrekFormState::new();
            app.open_dialog(ActiveDialog::TrekForm);
        }

        KeyCode::Char('b') => {
            if let Some(trek) = views::treks::selected_trek(app) {
                app.batch_form.reset_with_trek(&trek.name);
                app.open_dialog(ActiveDialog::BatchForm);
            } else {
                app.notify(Notification::info("Select a trek first"));
            }
        }

        KeyCode::Char('o') => {
            let summaries = views::treks::selected_trek_batches(app);
            match summaries.get(app.selected_batch_index) {
                Some(summary) => {
                    let id = summary.batch.id.as_uuid().to_string();
                    app.booking_form.reset_with_batch(&id);
                    app.open_dialog(ActiveDialog::BookingForm);
                }
                None => app.notify(Notification::info("Select a departure first (J/K)")),
            }
        }

        KeyCode::Char('x') => {
            if let Some(trek) = views::treks::selected_trek(app) {
                let service = TrekService::new(app.storage);
                match service.deactivate(trek.id) {
                    Ok(trek) => {
                        app.notify(Notification::success(format!("Trek '{}' deactivated", trek.name)))
                    }
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        KeyCode::Char('c') => {
            let summaries = views::treks::selected_trek_batches(app);
            if let Some(summary) = summaries.get(app.selected_batch_index) {
                app.confirm.ask(
                    format!(
                        "Cancel the {} departure and release its bookings?",
                        summary.batch.start_date
                    ),
                    ConfirmAction::CancelBatch(summary.batch.id),
                );
                app.open_dialog(ActiveDialog::Confirm);
            }
        }

        _ => {}
    }
}

fn handle_bookings_key(app: &mut App, key: KeyEvent) {
    let count = views::bookings::visible_bookings(app).len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_booking_index = select_next(app.selected_booking_index, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_booking_index = select_prev(app.selected_booking_index);
        }

        KeyCode::Char('a') => {
            app.booking_form = dialogs::booking::BookingFormState::new();
            app.open_dialog(ActiveDialog::BookingForm);
        }

        KeyCode::Enter => {
            if let Some(booking) = views::bookings::selected_booking(app) {
                let service = crate::services::BookingService::new(app.storage);
                match service.confirm(booking.id) {
                    Ok(booking) => app.notify(Notification::success(format!(
                        "Booking for '{}' confirmed",
                        booking.customer_name
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        KeyCode::Char('c') => {
            if let Some(booking) = views::bookings::selected_booking(app) {
                app.confirm.ask(
                    format!("Cancel the booking for '{}'?", booking.customer_name),
                    ConfirmAction::CancelBooking(booking.id),
                );
                app.open_dialog(ActiveDialog::Confirm);
            }
        }

        _ => {}
    }
}

fn handle_vendors_key(app: &mut App, key: KeyEvent) {
    let count = views::vendors::visible_vendors(app).len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_vendor_index = select_next(app.selected_vendor_index, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_vendor_index = select_prev(app.selected_vendor_index);
        }

        KeyCode::Char('v') | KeyCode::Enter => {
            if let Some(vendor) = views::vendors::selected_vendor(app) {
                app.vendor_review.reset_for(vendor.id, &vendor.company_name);
                app.open_dialog(ActiveDialog::VendorReview);
            }
        }

        KeyCode::Char('x') => {
            if let Some(vendor) = views::vendors::selected_vendor(app) {
                let service = VendorService::new(app.storage);
                match service.archive(vendor.id) {
                    Ok(vendor) => app.notify(Notification::success(format!(
                        "Vendor '{}' archived",
                        vendor.company_name
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        _ => {}
    }
}

fn handle_tickets_key(app: &mut App, key: KeyEvent) {
    let count = views::tickets::visible_tickets(app).len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_ticket_index = select_next(app.selected_ticket_index, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_ticket_index = select_prev(app.selected_ticket_index);
        }

        KeyCode::Char('a') => {
            app.ticket_form = dialogs::ticket::TicketFormState::new();
            app.open_dialog(ActiveDialog::TicketForm);
        }

        KeyCode::Char('r') => {
            if let Some(ticket) = views::tickets::selected_ticket(app) {
                app.ticket_reply.reset_for(ticket.id, &ticket.subject);
                app.open_dialog(ActiveDialog::TicketReply);
            }
        }

        KeyCode::Char('s') => {
            if let Some(ticket) = views::tickets::selected_ticket(app) {
                let next = match ticket.status {
                    TicketStatus::Open => TicketStatus::InProgress,
                    TicketStatus::InProgress => TicketStatus::Resolved,
                    TicketStatus::Resolved => TicketStatus::Closed,
                    TicketStatus::Closed => TicketStatus::Open,
                };
                let service = TicketService::new(app.storage);
                match service.set_status(ticket.id, next) {
                    Ok(ticket) => app.notify(Notification::success(format!(
                        "Ticket is now {}",
                        ticket.status
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        _ => {}
    }
}

fn handle_coupons_key(app: &mut App, key: KeyEvent) {
    let count = views::coupons::visible_coupons(app).len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_coupon_index = select_next(app.selected_coupon_index, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_coupon_index = select_prev(app.selected_coupon_index);
        }

        KeyCode::Char('a') => {
            app.coupon_form = dialogs::coupon::CouponFormState::new();
            app.open_dialog(ActiveDialog::CouponForm);
        }

        KeyCode::Char('x') => {
            if let Some(coupon) = views::coupons::selected_coupon(app) {
                let service = crate::services::CouponService::new(app.storage);
                match service.deactivate(coupon.id) {
                    Ok(coupon) => app.notify(Notification::success(format!(
                        "Coupon '{}' deactivated",
                        coupon.code
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        _ => {}
    }
}

fn handle_content_key(app: &mut App, key: KeyEvent) {
    let count = match app.content_tab {
        ContentTab::Banners => views::content::visible_banners(app).len(),
        ContentTab::Announcements => views::content::visible_announcements(app).len(),
    };

    match key.code {
        KeyCode::Tab => {
            app.content_tab = match app.content_tab {
                ContentTab::Banners => ContentTab::Announcements,
                ContentTab::Announcements => ContentTab::Banners,
            };
            app.selected_content_index = 0;
        }

        KeyCode::Char('j') | KeyCode::Down => {
            app.selected_content_index = select_next(app.selected_content_index, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_content_index = select_prev(app.selected_content_index);
        }

        KeyCode::Char('a') => match app.content_tab {
            ContentTab::Banners => {
                app.banner_form = dialogs::banner::BannerFormState::new();
                app.open_dialog(ActiveDialog::BannerForm);
            }
            ContentTab::Announcements => {
                app.announcement_form = dialogs::announcement::AnnouncementFormState::new();
                app.open_dialog(ActiveDialog::AnnouncementForm);
            }
        },

        KeyCode::Char('r') => {
            if let Some(announcement) = views::content::selected_announcement(app) {
                let service = ContentService::new(app.storage);
                match service.publish_announcement(announcement.id) {
                    Ok(announcement) => app.notify(Notification::success(format!(
                        "'{}' published",
                        announcement.title
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        KeyCode::Char('x') => {
            if let Some(banner) = views::content::selected_banner(app) {
                let service = ContentService::new(app.storage);
                match service.set_banner_active(banner.id, !banner.active) {
                    Ok(banner) => app.notify(Notification::success(format!(
                        "Banner '{}' is now {}",
                        banner.title,
                        if banner.active { "live" } else { "off" }
                    ))),
                    Err(e) => app.notify(Notification::error(e.to_string())),
                }
            }
        }

        KeyCode::Char('d') => {
            if let Some(banner) = views::content::selected_banner(app) {
                app.confirm.ask(
                    format!("Delete banner '{}'?", banner.title),
                    ConfirmAction::DeleteBanner(banner.id),
                );
                app.open_dialog(ActiveDialog::Confirm);
            }
        }

        _ => {}
    }
}
