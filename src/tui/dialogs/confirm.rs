//! Confirmation dialog
//!
//! A yes/no prompt guarding destructive actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{BannerId, BatchId, BookingId};
use crate::services::{BatchService, BookingService, ContentService};
use crate::tui::app::App;
use crate::tui::widgets::Notification;

use super::dialog_frame;

/// The action a confirmation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmAction {
    #[default]
    None,
    CancelBatch(BatchId),
    CancelBooking(BookingId),
    DeleteBanner(BannerId),
}

/// State for the confirmation dialog
#[derive(Debug, Clone, Default)]
pub struct ConfirmState {
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare a confirmation
    pub fn ask(&mut self, message: impl Into<String>, action: ConfirmAction) {
        self.message = message.into();
        self.action = action;
    }
}

/// Render the confirmation dialog
pub fn render(frame: &mut Frame, app: &App) {
    let width = (app.confirm.message.len() as u16 + 6).clamp(30, 70);
    let inner = dialog_frame(frame, "Confirm", width, 6);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(app.confirm.message.clone()), chunks[0]);

    let hints = Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Green)),
        Span::raw(" Yes  "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Red)),
        Span::raw(" No"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

/// Handle key input for the confirmation dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let action = app.confirm.action;
            app.close_dialog();
            app.confirm = ConfirmState::new();
            if let Err(e) = execute(app, action) {
                app.notify(Notification::error(e));
            }
            true
        }

        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.confirm = ConfirmState::new();
            true
        }

        _ => false,
    }
}

fn execute(app: &mut App, action: ConfirmAction) -> Result<(), String> {
    match action {
        ConfirmAction::None => {}

        ConfirmAction::CancelBatch(id) => {
            let service = BatchService::new(app.storage);
            service.cancel(id).map_err(|e| e.to_string())?;
            app.notify(Notification::success("Batch cancelled; bookings released"));
        }

        ConfirmAction::CancelBooking(id) => {
            let service = BookingService::new(app.storage);
            let booking = service.cancel(id).map_err(|e| e.to_string())?;
            app.notify(Notification::success(format!(
                "Booking for '{}' cancelled",
                booking.customer_name
            )));
        }

        ConfirmAction::DeleteBanner(id) => {
            let service = ContentService::new(app.storage);
            service.delete_banner(id).map_err(|e| e.to_string())?;
            app.notify(Notification::success("Banner deleted"));
        }
    }

    Ok(())
}
