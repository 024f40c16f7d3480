//! Trek entry dialog
//!
//! Modal dialog for adding treks: vendor, name, region, difficulty, length,
//! and price, with tab navigation and validate-on-save.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::{Difficulty, Money};
use crate::services::trek::CreateTrekInput;
use crate::services::{TrekService, VendorService};
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_choice, render_error, render_hints};

/// Difficulty grades available for selection
const DIFFICULTIES: &[Difficulty] = &[
    Difficulty::Easy,
    Difficulty::Moderate,
    Difficulty::Challenging,
    Difficulty::Strenuous,
];

/// Number of focusable fields (5 inputs + difficulty selector)
const FIELD_COUNT: usize = 6;

/// State for the trek form dialog
#[derive(Debug, Clone)]
pub struct TrekFormState {
    /// Currently focused field (0..FIELD_COUNT)
    pub focused: usize,
    pub vendor_input: TextInput,
    pub name_input: TextInput,
    pub region_input: TextInput,
    pub difficulty_index: usize,
    pub days_input: TextInput,
    pub price_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for TrekFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrekFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused: 0,
            vendor_input: TextInput::new().label("Vendor").placeholder("Company name"),
            name_input: TextInput::new().label("Name").placeholder("Trek name"),
            region_input: TextInput::new().label("Region").placeholder("Range or region"),
            difficulty_index: 1, // Moderate
            days_input: TextInput::new().label("Days").placeholder("6"),
            price_input: TextInput::new().label("Price").placeholder("14500.00"),
            error_message: None,
        }
    }

    /// Reset to a fresh form, keeping the vendor prefill
    pub fn reset_with_vendor(&mut self, vendor: &str) {
        *self = Self::new();
        self.vendor_input = TextInput::new().label("Vendor").content(vendor);
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
            0 => Some(&mut self.vendor_input),
            1 => Some(&mut self.name_input),
            2 => Some(&mut self.region_input),
            4 => Some(&mut self.days_input),
            5 => Some(&mut self.price_input),
            _ => None,
        }
    }

    /// Selected difficulty grade
    pub fn selected_difficulty(&self) -> Difficulty {
        DIFFICULTIES
            .get(self.difficulty_index)
            .copied()
            .unwrap_or(Difficulty::Moderate)
    }
}

/// Render the trek dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Add Trek", 56, 12);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Vendor
            Constraint::Length(1), // Name
            Constraint::Length(1), // Region
            Constraint::Length(1), // Difficulty
            Constraint::Length(1), // Days
            Constraint::Length(1), // Price
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.trek_form;
    form.vendor_input.render(frame, chunks[0], form.focused == 0);
    form.name_input.render(frame, chunks[1], form.focused == 1);
    form.region_input.render(frame, chunks[2], form.focused == 2);

    let options: Vec<String> = DIFFICULTIES.iter().map(|d| d.to_string()).collect();
    render_choice(
        frame,
        chunks[3],
        "Difficulty",
        &options,
        form.difficulty_index,
        form.focused == 3,
    );

    form.days_input.render(frame, chunks[4], form.focused == 4);
    form.price_input.render(frame, chunks[5], form.focused == 5);

    render_error(frame, chunks[7], &form.error_message);
    render_hints(frame, chunks[8], "Save");
}

/// Handle key input for the trek dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.trek_form.prev_field();
            } else {
                app.trek_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.trek_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_trek(app) {
                app.trek_form.error_message = Some(e);
            }
            true
        }

        KeyCode::Left if app.trek_form.focused == 3 => {
            app.trek_form.difficulty_index =
                (app.trek_form.difficulty_index + DIFFICULTIES.len() - 1) % DIFFICULTIES.len();
            true
        }

        KeyCode::Right if app.trek_form.focused == 3 => {
            app.trek_form.difficulty_index =
                (app.trek_form.difficulty_index + 1) % DIFFICULTIES.len();
            true
        }

        _ => {
            app.trek_form.error_message = None;
            if let Some(input) = app.trek_form.focused_input() {
                return input.handle_key(key);
            }
            false
        }
    }
}

/// Validate the form and create the trek
fn save_trek(app: &mut App) -> Result<(), String> {
    let form = &app.trek_form;

    let vendor_name = form
        .vendor_input
        .value_opt()
        .ok_or("Vendor is required")?;
    let name = form.name_input.value_opt().ok_or("Trek name is required")?;
    let region = form.region_input.value_opt().ok_or("Region is required")?;
    let days: u32 = form
        .days_input
        .value()
        .trim()
        .parse()
        .map_err(|_| "Days must be a whole number")?;
    let price = Money::parse(form.price_input.value()).map_err(|e| e.to_string())?;

    let vendor_service = VendorService::new(app.storage);
    let vendor = vendor_service
        .find(&vendor_name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Vendor not found: {}", vendor_name))?;

    let service = TrekService::new(app.storage);
    let trek = service
        .create(CreateTrekInput {
            vendor_id: vendor.id,
            name,
            region,
            difficulty: app.trek_form.selected_difficulty(),
            duration_days: days,
            price,
            description: String::new(),
        })
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.trek_form = TrekFormState::new();
    app.notify(Notification::success(format!("Trek '{}' created", trek.name)));
    Ok(())
}
