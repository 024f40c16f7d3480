//! Coupons view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::models::Coupon;
use crate::tui::app::App;

/// The coupons shown in this view, sorted by code
pub fn visible_coupons(app: &App) -> Vec<Coupon> {
    app.storage.coupons.get_all().unwrap_or_default()
}

/// The selected coupon, if any
pub fn selected_coupon(app: &App) -> Option<Coupon> {
    visible_coupons(app)
        .into_iter()
        .nth(app.selected_coupon_index)
}

/// Render the coupons view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let coupons = visible_coupons(app);

    let header = Row::new(vec!["Code", "Discount", "Valid", "Uses", "State"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = coupons
        .iter()
        .map(|c| {
            let uses = match c.max_uses {
                Some(max) => format!("{}/{}", c.times_used, max),
                None => c.times_used.to_string(),
            };
            let state_style = if c.active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                ratatui::text::Text::raw(c.code.clone()),
                ratatui::text::Text::raw(c.discount.to_string()),
                ratatui::text::Text::raw(format!("{} -> {}", c.valid_from, c.valid_until)),
                ratatui::text::Text::raw(uses),
                ratatui::text::Text::styled(
                    if c.active { "active" } else { "inactive" },
                    state_style,
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(14),
            ratatui::layout::Constraint::Length(14),
            ratatui::layout::Constraint::Min(26),
            ratatui::layout::Constraint::Length(8),
            ratatui::layout::Constraint::Length(10),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" Coupons ({}) ", coupons.len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !coupons.is_empty() {
        state.select(Some(app.selected_coupon_index.min(coupons.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
