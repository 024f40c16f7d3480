//! Text input widget
//!
//! A single-line text input with cursor support, rendered as
//! "Label: value" with the cursor highlighted when focused.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A simple text input field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; inputs are ASCII-oriented form fields)
    pub cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
    /// Label shown before the value
    pub label: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// The trimmed value, or None when empty
    pub fn value_opt(&self) -> Option<String> {
        let trimmed = self.content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_boundary(&self.content, self.cursor);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_boundary(&self.content, self.cursor);
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = next_boundary(&self.content, self.cursor);
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Handle an editing key; returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_start();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }

    /// Render the input on one line
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(format!("{}: ", self.label), label_style));
        }

        let value_style = Style::default().fg(Color::White);

        if self.content.is_empty() && !focused && !self.placeholder.is_empty() {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if focused {
            let cursor = self.cursor.min(self.content.len());
            let (before, after) = self.content.split_at(cursor);
            spans.push(Span::styled(before.to_string(), value_style));

            let cursor_char = after.chars().next().unwrap_or(' ');
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));

            let rest: String = after.chars().skip(1).collect();
            if !rest.is_empty() {
                spans.push(Span::styled(rest, value_style));
            }
        } else {
            spans.push(Span::styled(self.content.clone(), value_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn prev_boundary(s: &str, from: usize) -> usize {
    let mut idx = from - 1;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn next_boundary(s: &str, from: usize) -> usize {
    let mut idx = from + 1;
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.value(), "hi");

        input.backspace();
        assert_eq!(input.value(), "h");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new().content("abc");
        assert_eq!(input.cursor, 3);

        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "abxc");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bxc");
    }

    #[test]
    fn test_value_opt_trims() {
        let input = TextInput::new().content("  ");
        assert_eq!(input.value_opt(), None);

        let input = TextInput::new().content(" hi ");
        assert_eq!(input.value_opt().as_deref(), Some("hi"));
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut input = TextInput::new().content("a₹b");
        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "ab");
    }
}
