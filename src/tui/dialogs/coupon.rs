//! Coupon entry dialog

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::{Discount, Money};
use crate::services::CouponService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_choice, render_error, render_hints};

const FIELD_COUNT: usize = 6;

/// State for the coupon form dialog
#[derive(Debug, Clone)]
pub struct CouponFormState {
    pub focused: usize,
    pub code_input: TextInput,
    /// true = percent discount, false = flat amount
    pub is_percent: bool,
    pub value_input: TextInput,
    pub from_input: TextInput,
    pub until_input: TextInput,
    pub max_uses_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for CouponFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CouponFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused: 0,
            code_input: TextInput::new().label("Code").placeholder("MONSOON15"),
            is_percent: true,
            value_input: TextInput::new().label("Value").placeholder("15"),
            from_input: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            until_input: TextInput::new().label("Until").placeholder("YYYY-MM-DD"),
            max_uses_input: TextInput::new().label("Max uses").placeholder("blank = unlimited"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// The focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            0 => Some(&mut self.code_input),
            2 => Some(&mut self.value_input),
            3 => Some(&mut self.from_input),
            4 => Some(&mut self.until_input),
            5 => Some(&mut self.max_uses_input),
            _ => None,
        }
    }
}

/// Render the coupon dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Add Coupon", 54, 12);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Code
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Value
            Constraint::Length(1), // From
            Constraint::Length(1), // Until
            Constraint::Length(1), // Max uses
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.coupon_form;
    form.code_input.render(frame, chunks[0], form.focused == 0);

    let options = vec!["Percent".to_string(), "Flat".to_string()];
    let selected = if form.is_percent { 0 } else { 1 };
    render_choice(frame, chunks[1], "Kind", &options, selected, form.focused == 1);

    form.value_input.render(frame, chunks[2], form.focused == 2);
    form.from_input.render(frame, chunks[3], form.focused == 3);
    form.until_input.render(frame, chunks[4], form.focused == 4);
    form.max_uses_input.render(frame, chunks[5], form.focused == 5);

    render_error(frame, chunks[7], &form.error_message);
    render_hints(frame, chunks[8], "Save");
}

/// Handle key input for the coupon dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.coupon_form.prev_field();
            } else {
                app.coupon_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.coupon_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_coupon(app) {
                app.coupon_form.error_message = Some(e);
            }
            true
        }

        KeyCode::Left | KeyCode::Right if app.coupon_form.focused == 1 => {
            app.coupon_form.is_percent = !app.coupon_form.is_percent;
            true
        }

        _ => {
            app.coupon_form.error_message = None;
            if let Some(input) = app.coupon_form.focused_input() {
                return input.handle_key(key);
            }
            false
        }
    }
}

fn parse_date(s: &str, label: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be YYYY-MM-DD", label))
}

/// Validate the form and create the coupon
fn save_coupon(app: &mut App) -> Result<(), String> {
    let form = &app.coupon_form;

    let code = form.code_input.value_opt().ok_or("Code is required")?;
    let value = form.value_input.value_opt().ok_or("Value is required")?;

    let discount = if form.is_percent {
        let pct: u8 = value
            .parse()
            .map_err(|_| "Percent must be a whole number between 1 and 100")?;
        Discount::Percent(pct)
    } else {
        Discount::Flat(Money::parse(&value).map_err(|e| e.to_string())?)
    };

    let from = parse_date(form.from_input.value(), "From date")?;
    let until = parse_date(form.until_input.value(), "Until date")?;
    let max_uses = match form.max_uses_input.value_opt() {
        Some(m) => Some(m.parse().map_err(|_| "Max uses must be a whole number")?),
        None => None,
    };

    let service = CouponService::new(app.storage);
    let coupon = service
        .create(&code, discount, from, until, max_uses)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.coupon_form = CouponFormState::new();
    app.notify(Notification::success(format!("Coupon '{}' created", coupon.code)));
    Ok(())
}
