//! Batch scheduling dialog

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::Money;
use crate::services::{BatchService, TrekService};
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_error, render_hints};

const FIELD_COUNT: usize = 5;

/// State for the batch form dialog
#[derive(Debug, Clone)]
pub struct BatchFormState {
    pub focused: usize,
    pub trek_input: TextInput,
    pub start_input: TextInput,
    pub end_input: TextInput,
    pub capacity_input: TextInput,
    pub price_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for BatchFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused: 0,
            trek_input: TextInput::new().label("Trek").placeholder("Trek name"),
            start_input: TextInput::new().label("Start").placeholder("YYYY-MM-DD"),
            end_input: TextInput::new().label("End").placeholder("YYYY-MM-DD"),
            capacity_input: TextInput::new().label("Seats").placeholder("12"),
            price_input: TextInput::new()
                .label("Override")
                .placeholder("blank = trek price"),
            error_message: None,
        }
    }

    /// Reset to a fresh form prefilled with a trek name
    pub fn reset_with_trek(&mut self, trek: &str) {
        *self = Self::new();
        self.trek_input = TextInput::new().label("Trek").content(trek);
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
            0 => &mut self.trek_input,
            1 => &mut self.start_input,
            2 => &mut self.end_input,
            3 => &mut self.capacity_input,
            _ => &mut self.price_input,
        }
    }
}

/// Render the batch dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Schedule Departure", 52, 11);

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

    let form = &app.batch_form;
    form.trek_input.render(frame, chunks[0], form.focused == 0);
    form.start_input.render(frame, chunks[1], form.focused == 1);
    form.end_input.render(frame, chunks[2], form.focused == 2);
    form.capacity_input.render(frame, chunks[3], form.focused == 3);
    form.price_input.render(frame, chunks[4], form.focused == 4);

    render_error(frame, chunks[6], &form.error_message);
    render_hints(frame, chunks[7], "Schedule");
}

/// Handle key input for the batch dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.batch_form.prev_field();
            } else {
                app.batch_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.batch_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_batch(app) {
                app.batch_form.error_message = Some(e);
            }
            true
        }

        _ => {
            app.batch_form.error_message = None;
            app.batch_form.focused_input().handle_key(key)
        }
    }
}

fn parse_date(s: &str, label: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be YYYY-MM-DD", label))
}

/// Validate the form and schedule the batch
fn save_batch(app: &mut App) -> Result<(), String> {
    let form = &app.batch_form;

    let trek_name = form.trek_input.value_opt().ok_or("Trek is required")?;
    let start = parse_date(form.start_input.value(), "Start date")?;
    let end = parse_date(form.end_input.value(), "End date")?;
    let capacity: u32 = form
        .capacity_input
        .value()
        .trim()
        .parse()
        .map_err(|_| "Seats must be a whole number")?;
    let price_override = match form.price_input.value_opt() {
        Some(p) => Some(Money::parse(&p).map_err(|e| e.to_string())?),
        None => None,
    };

    let trek_service = TrekService::new(app.storage);
    let trek = trek_service
        .find(&trek_name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Trek not found: {}", trek_name))?;

    let service = BatchService::new(app.storage);
    let batch = service
        .schedule(trek.id, start, end, capacity, price_override)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.batch_form = BatchFormState::new();
    app.notify(Notification::success(format!(
        "Departure {} scheduled",
        batch.start_date
    )));
    Ok(())
}
