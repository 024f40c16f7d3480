//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::paths::TrailheadPaths;
use crate::config::settings::Settings;
use crate::storage::Storage;

use super::dialogs::announcement::AnnouncementFormState;
use super::dialogs::banner::BannerFormState;
use super::dialogs::batch::BatchFormState;
use super::dialogs::booking::BookingFormState;
use super::dialogs::confirm::ConfirmState;
use super::dialogs::coupon::CouponFormState;
use super::dialogs::ticket::{TicketFormState, TicketReplyState};
use super::dialogs::trek::TrekFormState;
use super::dialogs::vendor_review::VendorReviewState;
use super::views::registration::RegistrationScreenState;
use super::widgets::Notification;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Treks,
    Bookings,
    Vendors,
    Tickets,
    Coupons,
    Content,
    Registration,
}

impl ActiveView {
    /// Views in sidebar order
    pub const ALL: [ActiveView; 7] = [
        Self::Treks,
        Self::Bookings,
        Self::Vendors,
        Self::Tickets,
        Self::Coupons,
        Self::Content,
        Self::Registration,
    ];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Treks => "Treks",
            Self::Bookings => "Bookings",
            Self::Vendors => "Vendors",
            Self::Tickets => "Support",
            Self::Coupons => "Coupons",
            Self::Content => "Content",
            Self::Registration => "Register",
        }
    }
}

/// Which tab of the content view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    Banners,
    Announcements,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    TrekForm,
    BatchForm,
    BookingForm,
    CouponForm,
    TicketForm,
    TicketReply,
    VendorReview,
    BannerForm,
    AnnouncementForm,
    Confirm,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a TrailheadPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row per view
    pub selected_trek_index: usize,
    pub selected_batch_index: usize,
    pub selected_booking_index: usize,
    pub selected_vendor_index: usize,
    pub selected_ticket_index: usize,
    pub selected_coupon_index: usize,
    pub selected_content_index: usize,

    /// Which content tab is shown
    pub content_tab: ContentTab,

    /// Transient toast message
    pub notification: Option<Notification>,

    /// Ticks since the notification appeared
    pub notification_age: u8,

    /// Dialog states
    pub trek_form: TrekFormState,
    pub batch_form: BatchFormState,
    pub booking_form: BookingFormState,
    pub coupon_form: CouponFormState,
    pub ticket_form: TicketFormState,
    pub ticket_reply: TicketReplyState,
    pub vendor_review: VendorReviewState,
    pub banner_form: BannerFormState,
    pub announcement_form: AnnouncementFormState,
    pub confirm: ConfirmState,

    /// Registration wizard screen state
    pub registration: RegistrationScreenState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings, paths: &'a TrailheadPaths) -> Self {
        Self {
            storage,
            settings,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_trek_index: 0,
            selected_batch_index: 0,
            selected_booking_index: 0,
            selected_vendor_index: 0,
            selected_ticket_index: 0,
            selected_coupon_index: 0,
            selected_content_index: 0,
            content_tab: ContentTab::default(),
            notification: None,
            notification_age: 0,
            trek_form: TrekFormState::new(),
            batch_form: BatchFormState::new(),
            booking_form: BookingFormState::new(),
            coupon_form: CouponFormState::new(),
            ticket_form: TicketFormState::new(),
            ticket_reply: TicketReplyState::new(),
            vendor_review: VendorReviewState::new(),
            banner_form: BannerFormState::new(),
            announcement_form: AnnouncementFormState::new(),
            confirm: ConfirmState::new(),
            registration: RegistrationScreenState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.notification_age = 0;
    }

    /// Age the notification on each tick; drop it after a few seconds
    pub fn tick(&mut self) {
        if self.notification.is_some() {
            self.notification_age = self.notification_age.saturating_add(1);
            if self.notification_age > 12 {
                self.notification = None;
            }
        }
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;

        match view {
            ActiveView::Treks => {
                self.selected_trek_index = 0;
                self.selected_batch_index = 0;
            }
            ActiveView::Bookings => self.selected_booking_index = 0,
            ActiveView::Vendors => self.selected_vendor_index = 0,
            ActiveView::Tickets => self.selected_ticket_index = 0,
            ActiveView::Coupons => self.selected_coupon_index = 0,
            ActiveView::Content => self.selected_content_index = 0,
            ActiveView::Registration => {
                self.registration.enter(self.paths);
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Whether a dialog is currently open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}

/// Move a selection index down within a list of `len` rows
pub fn select_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1).min(len - 1)
    }
}

/// Move a selection index up
pub fn select_prev(index: usize) -> usize {
    index.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_helpers_clamp() {
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_next(1, 3), 2);
        assert_eq!(select_next(2, 3), 2);
        assert_eq!(select_prev(0), 0);
        assert_eq!(select_prev(2), 1);
    }

    #[test]
    fn test_view_labels() {
        assert_eq!(ActiveView::Tickets.label(), "Support");
        assert_eq!(ActiveView::ALL.len(), 7);
    }
}
