//! Sidebar view switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Trailhead ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, view) in ActiveView::ALL.iter().enumerate() {
        let style = if *view == app.active_view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let badge = badge_for(app, *view);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:<10}", view.label()), style),
            Span::styled(badge, Style::default().fg(Color::Yellow)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A small count badge next to views that have work waiting
fn badge_for(app: &App, view: ActiveView) -> String {
    match view {
        ActiveView::Vendors => {
            let pending = app.storage.vendors.get_pending().map(|v| v.len()).unwrap_or(0);
            if pending > 0 {
                format!(" {}", pending)
            } else {
                String::new()
            }
        }
        ActiveView::Tickets => {
            let active = app.storage.tickets.get_active().map(|t| t.len()).unwrap_or(0);
            if active > 0 {
                format!(" {}", active)
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}
