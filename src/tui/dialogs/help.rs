//! Help dialog
//!
//! Key reference shown on '?'.

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

use super::dialog_frame;

const KEYS: &[(&str, &str)] = &[
    ("1-7", "Switch view"),
    ("j/k, ↑/↓", "Move selection"),
    ("a", "Add (trek, booking, coupon, ticket, banner)"),
    ("b", "Schedule departure (treks view)"),
    ("o", "Book selected departure (treks view)"),
    ("v", "Review selected vendor (vendors view)"),
    ("r", "Reply to ticket / publish announcement"),
    ("s", "Cycle ticket status (tickets view)"),
    ("c", "Cancel selected batch/booking"),
    ("x", "Deactivate (trek, coupon, banner)"),
    ("Tab", "Switch content tab"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &App) {
    let height = KEYS.len() as u16 + 4;
    let inner = dialog_frame(frame, "Keys", 58, height);

    let mut lines = Vec::new();
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(*action, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Any key closes the help dialog
pub fn handle_key(app: &mut App, _key: KeyEvent) -> bool {
    app.close_dialog();
    true
}
