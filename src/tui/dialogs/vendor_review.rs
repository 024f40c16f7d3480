//! Vendor review dialog
//!
//! The admin verification decision: approve the selected vendor or reject
//! it with a reason.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::VendorId;
use crate::services::VendorService;
use crate::tui::app::App;
use crate::tui::widgets::{Notification, TextInput};

use super::{dialog_frame, render_choice, render_error};

/// Review decision being prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewDecision {
    #[default]
    Approve,
    Reject,
}

/// State for the vendor review dialog
#[derive(Debug, Clone)]
pub struct VendorReviewState {
    /// Vendor under review
    pub vendor_id: Option<VendorId>,
    /// Company name shown for context
    pub company_name: String,
    pub decision: ReviewDecision,
    pub reason_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for VendorReviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorReviewState {
    pub fn new() -> Self {
        Self {
            vendor_id: None,
            company_name: String::new(),
            decision: ReviewDecision::Approve,
            reason_input: TextInput::new().label("Reason").placeholder("shown to the vendor"),
            error_message: None,
        }
    }

    /// Reset for a specific vendor
    pub fn reset_for(&mut self, vendor_id: VendorId, company_name: &str) {
        *self = Self::new();
        self.vendor_id = Some(vendor_id);
        self.company_name = company_name.to_string();
    }
}

/// Render the vendor review dialog
pub fn render(frame: &mut Frame, app: &App) {
    let title = format!("Review: {}", app.vendor_review.company_name);
    let inner = dialog_frame(frame, &title, 56, 9);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Decision
            Constraint::Length(1), // Reason
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let state = &app.vendor_review;
    let options = vec!["Approve".to_string(), "Reject".to_string()];
    let selected = match state.decision {
        ReviewDecision::Approve => 0,
        ReviewDecision::Reject => 1,
    };
    render_choice(frame, chunks[0], "Decision", &options, selected, true);

    if state.decision == ReviewDecision::Reject {
        state.reason_input.render(frame, chunks[1], true);
    }

    render_error(frame, chunks[3], &state.error_message);

    let hints = Line::from(vec![
        Span::styled("[←/→]", Style::default().fg(Color::White)),
        Span::raw(" Decision  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Apply  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the vendor review dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Left | KeyCode::Right => {
            app.vendor_review.decision = match app.vendor_review.decision {
                ReviewDecision::Approve => ReviewDecision::Reject,
                ReviewDecision::Reject => ReviewDecision::Approve,
            };
            true
        }

        KeyCode::Enter => {
            if let Err(e) = apply_decision(app) {
                app.vendor_review.error_message = Some(e);
            }
            true
        }

        _ => {
            if app.vendor_review.decision == ReviewDecision::Reject {
                app.vendor_review.error_message = None;
                return app.vendor_review.reason_input.handle_key(key);
            }
            false
        }
    }
}

fn apply_decision(app: &mut App) -> Result<(), String> {
    let vendor_id = app.vendor_review.vendor_id.ok_or("No vendor selected")?;
    let service = VendorService::new(app.storage);

    let message = match app.vendor_review.decision {
        ReviewDecision::Approve => {
            let vendor = service.verify(vendor_id).map_err(|e| e.to_string())?;
            format!("Vendor '{}' verified", vendor.company_name)
        }
        ReviewDecision::Reject => {
            let reason = app
                .vendor_review
                .reason_input
                .value_opt()
                .ok_or("A rejection reason is required")?;
            let vendor = service
                .reject(vendor_id, &reason)
                .map_err(|e| e.to_string())?;
            format!("Vendor '{}' rejected", vendor.company_name)
        }
    };

    app.close_dialog();
    app.vendor_review = VendorReviewState::new();
    app.notify(Notification::success(message));
    Ok(())
}
