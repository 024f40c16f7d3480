//! Vendors view
//!
//! The admin verification queue plus the full vendor list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Vendor, VerificationStatus};
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// The vendors shown in this view: pending first, then the rest
pub fn visible_vendors(app: &App) -> Vec<Vendor> {
    let mut vendors = app.storage.vendors.get_active().unwrap_or_default();
    vendors.sort_by_key(|v| match v.verification {
        VerificationStatus::Pending => 0,
        VerificationStatus::Verified => 1,
        VerificationStatus::Rejected(_) => 2,
    });
    vendors
}

/// The selected vendor, if any
pub fn selected_vendor(app: &App) -> Option<Vendor> {
    visible_vendors(app)
        .into_iter()
        .nth(app.selected_vendor_index)
}

/// Render the vendors view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_table(frame, app, layout.table);
    render_detail(frame, app, layout.detail);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let vendors = visible_vendors(app);
    let pending = vendors
        .iter()
        .filter(|v| v.verification.is_pending())
        .count();

    let header = Row::new(vec!["Company", "Contact", "Email", "City", "Status"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = vendors
        .iter()
        .map(|v| {
            let status_style = match v.verification {
                VerificationStatus::Pending => Style::default().fg(Color::Yellow),
                VerificationStatus::Verified => Style::default().fg(Color::Green),
                VerificationStatus::Rejected(_) => Style::default().fg(Color::Red),
            };
            Row::new(vec![
                ratatui::text::Text::raw(v.company_name.clone()),
                ratatui::text::Text::raw(v.contact_name.clone()),
                ratatui::text::Text::raw(v.email.clone()),
                ratatui::text::Text::raw(v.city.clone()),
                ratatui::text::Text::styled(v.verification.to_string(), status_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Min(20),
            ratatui::layout::Constraint::Length(16),
            ratatui::layout::Constraint::Min(22),
            ratatui::layout::Constraint::Length(12),
            ratatui::layout::Constraint::Length(9),
        ],
    )
    .header(header)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" Vendors ({} pending review) ", pending))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !vendors.is_empty() {
        state.select(Some(app.selected_vendor_index.min(vendors.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Details ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(vendor) = selected_vendor(app) else {
        frame.render_widget(Paragraph::new("No vendor selected."), inner);
        return;
    };

    let details = crate::display::vendor::format_vendor_details(&vendor);
    frame.render_widget(Paragraph::new(details), inner);
}
