#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Score input field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Characters a number input accepts
const NUMERIC_CHARS: &str = "0123456789.+-eE";

/// Input field state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Current raw text
    pub value:       String,
    /// Cursor position, in bytes (the value is always ASCII)
    pub cursor:      usize,
    /// Label shown in the border
    pub label:       String,
    /// Placeholder shown while empty
    pub placeholder: String,
    /// Whether the input has focus
    pub focused:     bool,
}

impl InputState {
    /// An empty, unfocused field labelled `label`
    pub fn new(label: &str) -> Self {
        Self {
            value:       String::new(),
            cursor:      0,
            label:       label.to_string(),
            placeholder: "0.0".to_string(),
            focused:     false,
        }
    }

    /// Inserts `c` at the cursor. Returns false when `c` is not something a
    /// number field accepts.
    pub fn insert(&mut self, c: char) -> bool {
        if !NUMERIC_CHARS.contains(c) {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Backspace; returns whether the text changed
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        true
    }

    /// Delete; returns whether the text changed
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        true
    }

    /// Moves the cursor one step left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one step right
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Replaces the text and puts the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    /// Empties the field
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Renders an [`InputState`] as a bordered single-line field
pub struct InputWidget<'a> {
    /// field being drawn
    state: &'a InputState,
}

impl<'a> InputWidget<'a> {
    /// Wraps `state` for rendering
    pub fn new(state: &'a InputState) -> Self {
        Self { state }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let value_style = Style::default().fg(Color::White);
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let placeholder_style = Style::default().fg(Color::DarkGray);

        let mut spans = vec![];
        if state.focused {
            let (before, after) = state.value.split_at(state.cursor.min(state.value.len()));
            let (cursor_char, rest) = if after.is_empty() {
                (" ", "")
            } else {
                after.split_at(1)
            };
            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(cursor_char, cursor_style));
            spans.push(Span::styled(rest, value_style));
        } else if state.value.is_empty() {
            spans.push(Span::styled(state.placeholder.as_str(), placeholder_style));
        } else {
            spans.push(Span::styled(state.value.as_str(), value_style));
        }

        let border_color = if state.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", state.label),
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(Line::from(spans))
            .centered()
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_the_cursor() {
        let mut input = InputState::new("Parcial 1");
        assert!(input.insert('1'));
        assert!(input.insert('5'));
        input.move_left();
        assert!(input.insert('.'));
        assert_eq!(input.value, "1.5");
        assert_eq!(input.cursor, 2);

        input.move_home();
        assert!(!input.delete_backward());
        assert!(input.delete_forward());
        assert_eq!(input.value, ".5");

        input.move_end();
        assert!(input.delete_backward());
        assert_eq!(input.value, ".");
    }

    #[test]
    fn rejects_non_numeric_chars() {
        let mut input = InputState::new("Permanente 1");
        assert!(!input.insert('a'));
        assert!(!input.insert('é'));
        assert!(input.insert('-'));
        assert_eq!(input.value, "-");
    }
}
