//! Announcement drafting dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::Audience;
use crate::services::ContentService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_choice, render_error, render_hints};

const AUDIENCES: &[Audience] = &[Audience::Everyone, Audience::Vendors, Audience::Customers];

const FIELD_COUNT: usize = 3;

/// State for the announcement form dialog
#[derive(Debug, Clone)]
pub struct AnnouncementFormState {
    pub focused: usize,
    pub title_input: TextInput,
    pub body_input: TextInput,
    pub audience_index: usize,
    pub error_message: Option<String>,
}

impl Default for AnnouncementFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncementFormState {
    pub fn new() -> Self {
        Self {
            focused: 0,
            title_input: TextInput::new().label("Title").placeholder("Headline"),
            body_input: TextInput::new().label("Body").placeholder("Announcement text"),
            audience_index: 0,
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
            1 => Some(&mut self.body_input),
            _ => None,
        }
    }

    pub fn selected_audience(&self) -> Audience {
        AUDIENCES
            .get(self.audience_index)
            .copied()
            .unwrap_or(Audience::Everyone)
    }
}

/// Render the announcement dialog
pub fn render(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Draft Announcement", 56, 9);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.announcement_form;
    form.title_input.render(frame, chunks[0], form.focused == 0);
    form.body_input.render(frame, chunks[1], form.focused == 1);

    let options: Vec<String> = AUDIENCES.iter().map(|a| a.to_string()).collect();
    render_choice(
        frame,
        chunks[2],
        "Audience",
        &options,
        form.audience_index,
        form.focused == 2,
    );

    render_error(frame, chunks[4], &form.error_message);
    render_hints(frame, chunks[5], "Draft");
}

/// Handle key input for the announcement dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.announcement_form.prev_field();
            } else {
                app.announcement_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.announcement_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_announcement(app) {
                app.announcement_form.error_message = Some(e);
            }
            true
        }

        KeyCode::Left if app.announcement_form.focused == 2 => {
            app.announcement_form.audience_index =
                (app.announcement_form.audience_index + AUDIENCES.len() - 1) % AUDIENCES.len();
            true
        }

        KeyCode::Right if app.announcement_form.focused == 2 => {
            app.announcement_form.audience_index =
                (app.announcement_form.audience_index + 1) % AUDIENCES.len();
            true
        }

        _ => {
            app.announcement_form.error_message = None;
            if let Some(input) = app.announcement_form.focused_input() {
                return input.handle_key(key);
            }
            false
        }
    }
}

fn save_announcement(app: &mut App) -> Result<(), String> {
    let form = &app.announcement_form;

    let title = form.title_input.value_opt().ok_or("Title is required")?;
    let body = form.body_input.value_opt().ok_or("Body is required")?;

    let service = ContentService::new(app.storage);
    let announcement = service
        .draft_announcement(&title, &body, app.announcement_form.selected_audience())
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.announcement_form = AnnouncementFormState::new();
    app.notify(Notification::success(format!(
        "Announcement '{}' drafted",
        announcement.title
    )));
    Ok(())
}
