//! Shared building blocks for the record forms.
//!
//! Each form is a modal over the active table: a column of labelled fields,
//! one focused at a time. Text fields edit through [`InputState`]; select
//! fields cycle through their options with the arrow keys. The helpers here
//! keep the three forms rendering and behaving identically.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Placeholder shown for an optional select field with nothing picked.
pub const UNSET_LABEL: &str = "(not set)";

/// Buffer plus char-indexed cursor for the focused text field.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_pos(&self) -> usize {
        self.buffer.chars().take(self.cursor).map(|ch| ch.len_utf8()).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos();
            let prev_char_len = self
                .buffer
                .chars()
                .nth(self.cursor - 1)
                .map(|ch| ch.len_utf8())
                .unwrap_or(1);
            self.buffer.remove(byte_pos - prev_char_len);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let byte_pos = self.byte_pos();
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Buffer with a block cursor at the edit position.
    pub fn display(&self) -> String {
        let byte_pos = self.byte_pos();
        format!("{}█{}", &self.buffer[..byte_pos], &self.buffer[byte_pos..])
    }
}

/// Render one form row: right-aligned label, value, optional error in red.
pub fn field_line(label: &str, value: String, focused: bool, error: Option<&str>) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!("{label:>15}: "), label_style),
        Span::styled(value, Style::default().fg(Color::White)),
    ];
    if let Some(error) = error {
        spans.push(Span::styled(format!("  {error}"), Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

/// Wrap a select value in angle markers while it has focus.
pub fn select_value(label: &str, focused: bool) -> String {
    if focused {
        format!("‹ {label} ›")
    } else {
        label.to_string()
    }
}

/// Cycle an optional selection through "(not set)" and each option.
pub fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let len = options.len() + 1;
    let pos = match current {
        None => 0,
        Some(value) => options.iter().position(|o| *o == value).map(|i| i + 1).unwrap_or(0),
    };
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    if next == 0 {
        None
    } else {
        Some(options[next - 1])
    }
}

/// Cycle a required selection through each option.
pub fn cycle_required<T: Copy + PartialEq>(current: T, options: &[T], forward: bool) -> T {
    let len = options.len();
    let pos = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    options[next]
}

/// Cycle a reference field through "(not set)" and each `(id, name)` option.
/// Returns the new identity, empty for the unset position.
pub fn cycle_id(current: &str, options: &[(String, String)], forward: bool) -> String {
    let len = options.len() + 1;
    let pos = if current.is_empty() {
        0
    } else {
        options.iter().position(|(id, _)| id == current).map(|i| i + 1).unwrap_or(0)
    };
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].0.clone()
    }
}

/// Display name for a reference field. Falls back to the raw identity when
/// the referenced record is not in the loaded options.
pub fn id_display(current: &str, options: &[(String, String)]) -> String {
    if current.is_empty() {
        return UNSET_LABEL.to_string();
    }
    options
        .iter()
        .find(|(id, _)| id == current)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| current.to_string())
}

/// Label for an optional select value.
pub fn option_label(label: Option<&str>) -> String {
    label.unwrap_or(UNSET_LABEL).to_string()
}
