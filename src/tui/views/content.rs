//! Content view
//!
//! Banners and announcements behind a two-tab switcher.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::models::{Announcement, Banner};
use crate::tui::app::{App, ContentTab};

/// Banners shown in the banners tab
pub fn visible_banners(app: &App) -> Vec<Banner> {
    app.storage.banners.get_all().unwrap_or_default()
}

/// Announcements shown in the announcements tab
pub fn visible_announcements(app: &App) -> Vec<Announcement> {
    app.storage.announcements.get_all().unwrap_or_default()
}

/// The selected banner, if the banners tab is active
pub fn selected_banner(app: &App) -> Option<Banner> {
    if app.content_tab != ContentTab::Banners {
        return None;
    }
    visible_banners(app)
        .into_iter()
        .nth(app.selected_content_index)
}

/// The selected announcement, if the announcements tab is active
pub fn selected_announcement(app: &App) -> Option<Announcement> {
    if app.content_tab != ContentTab::Announcements {
        return None;
    }
    visible_announcements(app)
        .into_iter()
        .nth(app.selected_content_index)
}

/// Render the content view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.content_tab {
        ContentTab::Banners => render_banners(frame, app, area),
        ContentTab::Announcements => render_announcements(frame, app, area),
    }
}

fn title(app: &App, count: usize) -> String {
    match app.content_tab {
        ContentTab::Banners => format!(" [Banners] | Announcements ({}) ", count),
        ContentTab::Announcements => format!(" Banners | [Announcements] ({}) ", count),
    }
}

fn render_banners(frame: &mut Frame, app: &App, area: Rect) {
    let banners = visible_banners(app);

    let header = Row::new(vec!["Title", "Placement", "Order", "Link", "State"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = banners
        .iter()
        .map(|b| {
            let state_style = if b.active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                ratatui::text::Text::raw(b.title.clone()),
                ratatui::text::Text::raw(b.placement.to_string()),
                ratatui::text::Text::raw(b.sort_order.to_string()),
                ratatui::text::Text::raw(b.link.clone()),
                ratatui::text::Text::styled(if b.active { "live" } else { "off" }, state_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(22),
            ratatui::layout::Constraint::Length(10),
            ratatui::layout::Constraint::Length(6),
            ratatui::layout::Constraint::Min(16),
            ratatui::layout::Constraint::Length(6),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(title(app, banners.len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !banners.is_empty() {
        state.select(Some(app.selected_content_index.min(banners.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_announcements(frame: &mut Frame, app: &App, area: Rect) {
    let announcements = visible_announcements(app);

    let header = Row::new(vec!["Title", "Audience", "State", "Created"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = announcements
        .iter()
        .map(|a| {
            let (state_text, state_style) = if a.is_published() {
                ("published", Style::default().fg(Color::Green))
            } else {
                ("draft", Style::default().fg(Color::Yellow))
            };
            Row::new(vec![
                ratatui::text::Text::raw(a.title.clone()),
                ratatui::text::Text::raw(a.audience.to_string()),
                ratatui::text::Text::styled(state_text, state_style),
                ratatui::text::Text::raw(a.created_at.format("%Y-%m-%d").to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(30),
            ratatui::layout::Constraint::Length(10),
            ratatui::layout::Constraint::Length(10),
            ratatui::layout::Constraint::Length(12),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(title(app, announcements.len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !announcements.is_empty() {
        state.select(Some(app.selected_content_index.min(announcements.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
