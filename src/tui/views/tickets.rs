//! Support tickets view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Ticket, TicketStatus};
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// The tickets shown in this view, most recently touched first
pub fn visible_tickets(app: &App) -> Vec<Ticket> {
    app.storage.tickets.get_all().unwrap_or_default()
}

/// The selected ticket, if any
pub fn selected_ticket(app: &App) -> Option<Ticket> {
    visible_tickets(app)
        .into_iter()
        .nth(app.selected_ticket_index)
}

/// Render the tickets view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_table(frame, app, layout.table);
    render_thread(frame, app, layout.detail);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let tickets = visible_tickets(app);
    let active = tickets.iter().filter(|t| t.status.is_active()).count();

    let header = Row::new(vec!["Subject", "Requester", "Replies", "Updated", "Status"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = tickets
        .iter()
        .map(|t| {
            let status_style = match t.status {
                TicketStatus::Open => Style::default().fg(Color::Yellow),
                TicketStatus::InProgress => Style::default().fg(Color::Cyan),
                TicketStatus::Resolved => Style::default().fg(Color::Green),
                TicketStatus::Closed => Style::default().fg(Color::DarkGray),
            };
            Row::new(vec![
                ratatui::text::Text::raw(t.subject.clone()),
                ratatui::text::Text::raw(t.requester_email.clone()),
                ratatui::text::Text::raw(t.replies.len().to_string()),
                ratatui::text::Text::raw(t.updated_at.format("%Y-%m-%d %H:%M").to_string()),
                ratatui::text::Text::styled(t.status.to_string(), status_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(28),
            ratatui::layout::Constraint::Min(20),
            ratatui::layout::Constraint::Length(8),
            ratatui::layout::Constraint::Length(17),
            ratatui::layout::Constraint::Length(12),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" Support ({} active) ", active))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !tickets.is_empty() {
        state.select(Some(app.selected_ticket_index.min(tickets.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_thread(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Thread ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ticket) = selected_ticket(app) else {
        frame.render_widget(Paragraph::new("No ticket selected."), inner);
        return;
    };

    let thread = crate::display::ticket::format_ticket_thread(&ticket);
    frame.render_widget(Paragraph::new(thread), inner);
}
