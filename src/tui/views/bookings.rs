//! Bookings view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::models::Booking;
use crate::tui::app::App;

/// The bookings shown in this view, newest first
pub fn visible_bookings(app: &App) -> Vec<Booking> {
    app.storage.bookings.get_all().unwrap_or_default()
}

/// The selected booking, if any
pub fn selected_booking(app: &App) -> Option<Booking> {
    visible_bookings(app)
        .into_iter()
        .nth(app.selected_booking_index)
}

/// Render the bookings view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let bookings = visible_bookings(app);
    let currency = &app.settings.currency_symbol;

    let header = Row::new(vec!["Customer", "Email", "Seats", "Amount", "Coupon", "Status"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = bookings
        .iter()
        .map(|b| {
            let status_style = match b.status {
                crate::models::BookingStatus::Confirmed => Style::default().fg(Color::Green),
                crate::models::BookingStatus::Cancelled => Style::default().fg(Color::Red),
                crate::models::BookingStatus::Pending => Style::default().fg(Color::Yellow),
            };
            Row::new(vec![
                ratatui::text::Text::raw(b.customer_name.clone()),
                ratatui::text::Text::raw(b.customer_email.clone()),
                ratatui::text::Text::raw(b.participants.to_string()),
                ratatui::text::Text::raw(b.amount.format_with_symbol(currency)),
                ratatui::text::Text::raw(b.coupon_code.clone().unwrap_or_else(|| "-".into())),
                ratatui::text::Text::styled(b.status.to_string(), status_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(18),
            ratatui::layout::Constraint::Min(22),
            ratatui::layout::Constraint::Length(6),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(10),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" Bookings ({}) ", bookings.len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !bookings.is_empty() {
        state.select(Some(app.selected_booking_index.min(bookings.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
