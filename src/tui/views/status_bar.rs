//! Status bar
//!
//! One line of context-sensitive key hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.active_view {
        ActiveView::Treks => "a add trek · b schedule · o book · x deactivate · c cancel batch",
        ActiveView::Bookings => "a add booking · Enter confirm · c cancel",
        ActiveView::Vendors => "v review · x archive",
        ActiveView::Tickets => "a open ticket · r reply · s cycle status",
        ActiveView::Coupons => "a add coupon · x deactivate",
        ActiveView::Content => "Tab switch tab · a add · r publish · x toggle · d delete",
        ActiveView::Registration => "wizard keys shown above",
    };

    let line = Line::from(vec![
        Span::styled(" 1-7 views ", Style::default().fg(Color::Cyan)),
        Span::styled("· ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::White)),
        Span::styled(" · ? help · q quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
