//! Booking capture dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::services::booking::CreateBookingInput;
use crate::services::BookingService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_error, render_hints};

const FIELD_COUNT: usize = 5;

/// State for the booking form dialog
#[derive(Debug, Clone)]
pub struct BookingFormState {
    pub focused: usize,
    pub batch_input: TextInput,
    pub customer_input: TextInput,
    pub email_input: TextInput,
    pub seats_input: TextInput,
    pub coupon_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused: 0,
            batch_input: TextInput::new().label("Batch").placeholder("Batch ID"),
            customer_input: TextInput::new().label("Customer").placeholder("Full name"),
            email_input: TextInput::new().label("Email").placeholder("customer@example.com"),
            seats_input: TextInput::new().label("Seats").content("1"),
            coupon_input: TextInput::new().label("Coupon").placeholder("optional code"),
            error_message: None,
        }
    }

    /// Reset to a fresh form prefilled with a batch ID
    pub fn reset_with_batch(&mut self, batch_id: &str) {
        *self = Self::new();
        self.batch_input = TextInput::new().label("Batch").content(batch_id);
        self.focused = 1;
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            0 => &mut self.batch_input,
            1 => &mut self.customer_input,
            2 => &mut self.email_input,
            3 => &mut self.seats_input,
            _ => &mut self.coupon_input,
        }
    }
}

/// Render the booking dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "New Booking", 54, 11);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.booking_form;
    form.batch_input.render(frame, chunks[0], form.focused == 0);
    form.customer_input.render(frame, chunks[1], form.focused == 1);
    form.email_input.render(frame, chunks[2], form.focused == 2);
    form.seats_input.render(frame, chunks[3], form.focused == 3);
    form.coupon_input.render(frame, chunks[4], form.focused == 4);

    render_error(frame, chunks[6], &form.error_message);
    render_hints(frame, chunks[7], "Book");
}

/// Handle key input for the booking dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.booking_form.prev_field();
            } else {
                app.booking_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.booking_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_booking(app) {
                app.booking_form.error_message = Some(e);
            }
            true
        }

        _ => {
            app.booking_form.error_message = None;
            app.booking_form.focused_input().handle_key(key)
        }
    }
}

/// Validate the form and capture the booking
fn save_booking(app: &mut App) -> Result<(), String> {
    let form = &app.booking_form;

    let batch_str = form.batch_input.value_opt().ok_or("Batch is required")?;
    let batch_id = batch_str
        .parse()
        .map_err(|_| format!("Invalid batch ID: {}", batch_str))?;
    let customer_name = form
        .customer_input
        .value_opt()
        .ok_or("Customer name is required")?;
    let customer_email = form.email_input.value_opt().ok_or("Email is required")?;
    let participants: u32 = form
        .seats_input
        .value()
        .trim()
        .parse()
        .map_err(|_| "Seats must be a whole number")?;
    let coupon_code = form.coupon_input.value_opt();

    let service = BookingService::new(app.storage);
    let booking = service
        .book(CreateBookingInput {
            batch_id,
            customer_name,
            customer_email,
            participants,
            coupon_code,
        })
        .map_err(|e| e.to_string())?;

    let amount = booking.amount.format_with_symbol(&app.settings.currency_symbol);
    app.close_dialog();
    app.booking_form = BookingFormState::new();
    app.notify(Notification::success(format!(
        "Booked {} seats for {} ({})",
        booking.participants, booking.customer_name, amount
    )));
    Ok(())
}
