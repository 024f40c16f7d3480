//! Support ticket dialogs
//!
//! Two dialogs share this module: opening a new ticket and replying to an
//! existing one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::TicketId;
use crate::services::TicketService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_error, render_hints};

const FORM_FIELD_COUNT: usize = 3;

/// State for the new-ticket dialog
#[derive(Debug, Clone)]
pub struct TicketFormState {
    pub focused: usize,
    pub subject_input: TextInput,
    pub body_input: TextInput,
    pub email_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for TicketFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketFormState {
    pub fn new() -> Self {
        Self {
            focused: 0,
            subject_input: TextInput::new().label("Subject").placeholder("Short summary"),
            body_input: TextInput::new().label("Details").placeholder("What happened?"),
            email_input: TextInput::new().label("Email").placeholder("requester@example.com"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FORM_FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FORM_FIELD_COUNT - 1) % FORM_FIELD_COUNT;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            0 => &mut self.subject_input,
            1 => &mut self.body_input,
            _ => &mut self.email_input,
        }
    }
}

/// State for the reply dialog
#[derive(Debug, Clone)]
pub struct TicketReplyState {
    /// Ticket being replied to
    pub ticket_id: Option<TicketId>,
    /// Subject shown in the title for context
    pub subject: String,
    pub body_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for TicketReplyState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketReplyState {
    pub fn new() -> Self {
        Self {
            ticket_id: None,
            subject: String::new(),
            body_input: TextInput::new().label("Reply"),
            error_message: None,
        }
    }

    /// Reset for a specific ticket
    pub fn reset_for(&mut self, ticket_id: TicketId, subject: &str) {
        *self = Self::new();
        self.ticket_id = Some(ticket_id);
        self.subject = subject.to_string();
    }
}

/// Render the new-ticket dialog
pub fn render_form(frame: &mut Frame, app: &App) {
    let inner = dialog_frame(frame, "Open Ticket", 56, 9);

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

    let form = &app.ticket_form;
    form.subject_input.render(frame, chunks[0], form.focused == 0);
    form.body_input.render(frame, chunks[1], form.focused == 1);
    form.email_input.render(frame, chunks[2], form.focused == 2);

    render_error(frame, chunks[4], &form.error_message);
    render_hints(frame, chunks[5], "Open");
}

/// Render the reply dialog
pub fn render_reply(frame: &mut Frame, app: &App) {
    let title = format!("Reply: {}", app.ticket_reply.subject);
    let inner = dialog_frame(frame, &title, 56, 7);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    app.ticket_reply.body_input.render(frame, chunks[0], true);
    render_error(frame, chunks[2], &app.ticket_reply.error_message);
    render_hints(frame, chunks[3], "Send");
}

/// Handle key input for the new-ticket dialog
pub fn handle_form_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.ticket_form.prev_field();
            } else {
                app.ticket_form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.ticket_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_ticket(app) {
                app.ticket_form.error_message = Some(e);
            }
            true
        }

        _ => {
            app.ticket_form.error_message = None;
            app.ticket_form.focused_input().handle_key(key)
        }
    }
}

/// Handle key input for the reply dialog
pub fn handle_reply_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_reply(app) {
                app.ticket_reply.error_message = Some(e);
            }
            true
        }

        _ => {
            app.ticket_reply.error_message = None;
            app.ticket_reply.body_input.handle_key(key)
        }
    }
}

fn save_ticket(app: &mut App) -> Result<(), String> {
    let form = &app.ticket_form;

    let subject = form.subject_input.value_opt().ok_or("Subject is required")?;
    let body = form.body_input.value_opt().ok_or("Details are required")?;
    let email = form.email_input.value_opt().ok_or("Email is required")?;

    let service = TicketService::new(app.storage);
    service
        .open(&subject, &body, &email, None)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.ticket_form = TicketFormState::new();
    app.notify(Notification::success("Ticket opened"));
    Ok(())
}

fn save_reply(app: &mut App) -> Result<(), String> {
    let ticket_id = app.ticket_reply.ticket_id.ok_or("No ticket selected")?;
    let body = app
        .ticket_reply
        .body_input
        .value_opt()
        .ok_or("Reply cannot be empty")?;

    let service = TicketService::new(app.storage);
    service
        .reply(ticket_id, "support", &body)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.ticket_reply = TicketReplyState::new();
    app.notify(Notification::success("Reply sent"));
    Ok(())
}
