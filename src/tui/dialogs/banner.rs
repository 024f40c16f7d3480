//! Banner entry dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::BannerPlacement;
use crate::services::ContentService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_choice, render_error, render_hints};

const PLACEMENTS: &[BannerPlacement] = &[
    BannerPlacement::Home,
    BannerPlacement::Listing,
    BannerPlacement::Checkout,
];

const FIELD_COUNT: usize = 5;

/// State for the banner form dialog
#[derive(Debug, Clone)]
pub struct BannerFormState {
    pub focused: usize,
    pub title_input: TextInput,
    pub image_input: TextInput,
    pub link_input: TextInput,
    pub placement_index: usize,
    pub sort_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for BannerFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerFormState {
    pub fn new() -> Self {
        Self {
            focused: 0,
            title_input: TextInput::new().label("Title").placeholder("Banner title"),
            image_input: TextInput::new().label("Image").placeholder("asset key or URL"),
            link_input: TextInput::new().label("Link").placeholder("target path"),
            placement_index: 0,
            sort_input: TextInput::new().label("Order").content("0"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            0 => Some(&mut self.title_input),
            1 => Some(&mut self.image_input),
            2 => Some(&mut self.link_input),
            4 => Some(&mut self.sort_input),
            _ => None,
        }
    }

    pub fn selected_placement(&self) -> BannerPlacement {
        PLACEMENTS
            .get(self.placement_index)
            .copied()
            .unwrap_or(BannerPlacement::Home)
    }
}

/// Render the banner dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Add Banner", 54, 11);

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

    let form = &app.banner_form;
    form.title_input.render(frame, chunks[0], form.focused == 0);
    form.image_input.render(frame, chunks[1], form.focused == 1);
    form.link_input.render(frame, chunks[2], form.focused == 2);

    let options: Vec<String> = PLACEMENTS.iter().map(|p| p.to_string()).collect();
    render_choice(
        frame,
        chunks[3],
        "Placement",
        &options,
        form.placement_index,
        form.focused == 3,
    );

    form.sort_input.render(frame, chunks[4], form.focused == 4);

    render_error(frame, chunks[6], &form.error_message);
    render_hints(frame, chunks[7], "Save");
}

/// Handle key input for the banner dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.banner_form.prev_field();
            } else {
                app.banner_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.banner_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_banner(app) {
                app.banner_form.error_message = Some(e);
            }
            true
        }

        KeyCode::Left if app.banner_form.focused == 3 => {
            app.banner_form.placement_index =
                (app.banner_form.placement_index + PLACEMENTS.len() - 1) % PLACEMENTS.len();
            true
        }

        KeyCode::Right if app.banner_form.focused == 3 => {
            app.banner_form.placement_index =
                (app.banner_form.placement_index + 1) % PLACEMENTS.len();
            true
        }

        _ => {
            app.banner_form.error_message = None;
            if let Some(input) = app.banner_form.focused_input() {
                return input.handle_key(key);
            }
            false
        }
    }
}

fn save_banner(app: &mut App) -> Result<(), String> {
    let form = &app.banner_form;

    let title = form.title_input.value_opt().ok_or("Title is required")?;
    let image = form.image_input.value_opt().ok_or("Image is required")?;
    let link = form.link_input.value().trim().to_string();
    let sort_order: i32 = form
        .sort_input
        .value()
        .trim()
        .parse()
        .map_err(|_| "Order must be a whole number")?;

    let service = ContentService::new(app.storage);
    let banner = service
        .create_banner(&title, &image, &link, app.banner_form.selected_placement(), sort_order)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.banner_form = BannerFormState::new();
    app.notify(Notification::success(format!("Banner '{}' created", banner.title)));
    Ok(())
}
