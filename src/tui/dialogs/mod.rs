//! Modal form dialogs
//!
//! Each dialog owns a form state struct (focused field, text inputs,
//! validation error) plus render and key-handling functions. Shared chrome
//! lives here.

pub mod announcement;
pub mod banner;
pub mod batch;
pub mod booking;
pub mod confirm;
pub mod coupon;
pub mod help;
pub mod ticket;
pub mod trek;
pub mod vendor_review;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect_fixed;

/// Clear the backdrop and draw the dialog frame; returns the inner area
pub fn dialog_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect_fixed(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

/// Render a validation error line (red), if any
pub fn render_error(frame: &mut Frame, area: Rect, error: &Option<String>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the standard key hints line
pub fn render_hints(frame: &mut Frame, area: Rect, save_label: &str) {
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", save_label)),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

/// Render a horizontal choice selector, highlighting the active option
pub fn render_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[String],
    selected: usize,
    focused: bool,
) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];
    for (i, option) in options.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(Color::Black)
                .bg(if focused { Color::Cyan } else { Color::DarkGray })
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw(" "));
    }
    if focused {
        spans.push(Span::styled(
            "(←/→ to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
