//! Toast notification widget
//!
//! Transient messages shown over the bottom-right corner of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Border and title color for this kind
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Title shown in the border
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " Info ",
            Self::Success => " OK ",
            Self::Error => " Error ",
        }
    }
}

/// A transient toast message
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Render the toast over the bottom-right corner of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = (self.message.len() as u16 + 4).min(area.width.saturating_sub(2)).max(12);
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + area.height.saturating_sub(4),
            width,
            3,
        );

        frame.render_widget(Clear, rect);

        let block = Block::default()
            .title(self.kind.title())
            .title_style(
                Style::default()
                    .fg(self.kind.color())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.kind.color()));

        let paragraph = Paragraph::new(self.message.clone())
            .style(Style::default().fg(Color::White))
            .block(block);

        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors_differ() {
        assert_ne!(NotificationKind::Info.color(), NotificationKind::Error.color());
    }

    #[test]
    fn test_constructors() {
        let n = Notification::error("boom");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "boom");
    }
}
