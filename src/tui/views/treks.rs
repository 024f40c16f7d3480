//! Trek catalog view
//!
//! A table of treks with the selected trek's departures below it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::models::Trek;
use crate::services::batch::BatchSummary;
use crate::services::BatchService;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// The treks shown in this view, in table order
pub fn visible_treks(app: &App) -> Vec<Trek> {
    app.storage.treks.get_all().unwrap_or_default()
}

/// The selected trek, if any
pub fn selected_trek(app: &App) -> Option<Trek> {
    visible_treks(app).into_iter().nth(app.selected_trek_index)
}

/// Departures of the selected trek
pub fn selected_trek_batches(app: &App) -> Vec<BatchSummary> {
    let Some(trek) = selected_trek(app) else {
        return Vec::new();
    };
    let service = BatchService::new(app.storage);
    service.list_for_trek(trek.id).unwrap_or_default()
}

/// Render the trek catalog view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_trek_table(frame, app, layout.table);
    render_batches(frame, app, layout.detail);
}

fn render_trek_table(frame: &mut Frame, app: &App, area: Rect) {
    let treks = visible_treks(app);
    let currency = &app.settings.currency_symbol;

    let header = Row::new(vec!["Name", "Region", "Difficulty", "Days", "Price", "Status"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = treks
        .iter()
        .map(|t| {
            Row::new(vec![
                t.name.clone(),
                t.region.clone(),
                t.difficulty.to_string(),
                t.duration_days.to_string(),
                t.price.format_with_symbol(currency),
                if t.active { "Active" } else { "Inactive" }.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(24),
            ratatui::layout::Constraint::Length(18),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(5),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(9),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" Treks ({}) ", treks.len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !treks.is_empty() {
        state.select(Some(app.selected_trek_index.min(treks.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_batches(frame: &mut Frame, app: &App, area: Rect) {
    let summaries = selected_trek_batches(app);
    let currency = &app.settings.currency_symbol;

    let header = Row::new(vec!["Departure", "Return", "Seats", "Price", "Status"])
        .style(Style::default().fg(Color::Cyan));

    let rows: Vec<Row> = summaries
        .iter()
        .map(|s| {
            Row::new(vec![
                s.batch.start_date.to_string(),
                s.batch.end_date.to_string(),
                format!("{}/{} free", s.seats_left, s.batch.capacity),
                s.effective_price.format_with_symbol(currency),
                s.batch.status.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Min(9),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray))
    .block(
        Block::default()
            .title(" Departures ")
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !summaries.is_empty() {
        state.select(Some(app.selected_batch_index.min(summaries.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
