//! Common UI components and utilities for the notes TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default()
    }

    /// Row under the list cursor
    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Row of the note currently open in the editor
    pub fn open_note() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn disabled() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Color::Gray)
    }
}

fn focus_border(is_focused: bool) -> Style {
    if is_focused {
        Styles::active_border()
    } else {
        Styles::inactive_border()
    }
}

/// Byte offset of the `char_index`-th character
fn byte_offset(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Single-line input field widget. The cursor counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_focused: bool,
    pub cursor_position: usize,
}

impl InputField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            placeholder: String::new(),
            is_focused: false,
            cursor_position: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Replace the value and park the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_position = self.value.chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.insert(at, c);
        self.cursor_position += 1;
    }

    /// Returns true when a character was removed
    pub fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.remove(at);
        true
    }

    /// Returns true when a character was removed
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor_position >= self.value.chars().count() {
            return false;
        }
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.remove(at);
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Render the input field as a widget
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let display_text = if showing_placeholder {
            &self.placeholder
        } else {
            &self.value
        };

        let block = Block::default()
            .title(self.label.as_str())
            .borders(Borders::ALL)
            .border_style(focus_border(self.is_focused));

        let input_style = if showing_placeholder {
            Styles::inactive()
        } else {
            Styles::default()
        };

        // Scroll horizontally so the cursor stays inside the box
        let inner_width = area.width.saturating_sub(2) as usize;
        let before_cursor = &self.value[..byte_offset(&self.value, self.cursor_position)];
        let mut cursor_column = before_cursor.width();
        let mut scroll = 0u16;
        if inner_width > 0 && cursor_column >= inner_width {
            scroll = clamp_u16(cursor_column + 1 - inner_width);
            cursor_column = inner_width - 1;
        }

        let paragraph = Paragraph::new(display_text.to_string())
            .style(input_style)
            .scroll((0, scroll))
            .block(block);

        f.render_widget(paragraph, area);

        if self.is_focused && inner_width > 0 {
            f.set_cursor(area.x + 1 + cursor_column as u16, area.y + 1);
        }
    }
}

/// Multi-line text editing widget for note content
#[derive(Debug, Clone)]
pub struct TextArea {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_focused: bool,
    /// Character index into `value`
    pub cursor_position: usize,
}

impl TextArea {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            placeholder: String::new(),
            is_focused: false,
            cursor_position: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_position = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.remove(at);
        true
    }

    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor_position >= self.value.chars().count() {
            return false;
        }
        let at = byte_offset(&self.value, self.cursor_position);
        self.value.remove(at);
        true
    }

    fn line_lengths(&self) -> Vec<usize> {
        self.value.split('\n').map(|line| line.chars().count()).collect()
    }

    /// (line, column) of the cursor, both in characters
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let lengths = self.line_lengths();
        let mut remaining = self.cursor_position;
        for (line, len) in lengths.iter().enumerate() {
            if remaining <= *len {
                return (line, remaining);
            }
            remaining -= len + 1;
        }
        let last = lengths.len().saturating_sub(1);
        (last, lengths.get(last).copied().unwrap_or(0))
    }

    fn move_to_line_col(&mut self, line: usize, col: usize) {
        let lengths = self.line_lengths();
        let line = line.min(lengths.len().saturating_sub(1));
        let start: usize = lengths[..line].iter().map(|len| len + 1).sum();
        self.cursor_position = start + col.min(lengths[line]);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line > 0 {
            self.move_to_line_col(line - 1, col);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        self.move_to_line_col(line + 1, col);
    }

    pub fn move_cursor_to_line_start(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.move_to_line_col(line, 0);
    }

    pub fn move_cursor_to_line_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.move_to_line_col(line, usize::MAX);
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let block = Block::default()
            .title(self.label.as_str())
            .borders(Borders::ALL)
            .border_style(focus_border(self.is_focused));

        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        let (line, col) = self.cursor_line_col();
        let scroll = if inner_height > 0 && line >= inner_height {
            line + 1 - inner_height
        } else {
            0
        };

        // Scroll sideways so the cursor column stays inside the box
        let current_line = self.value.split('\n').nth(line).unwrap_or_default();
        let mut column: usize = current_line.chars().take(col).filter_map(|c| c.width()).sum();
        let mut h_scroll = 0;
        if inner_width > 0 && column >= inner_width {
            h_scroll = column + 1 - inner_width;
            column = inner_width - 1;
        }

        let (text, style) = if showing_placeholder {
            (self.placeholder.clone(), Styles::inactive())
        } else {
            (self.value.clone(), Styles::default())
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .scroll((clamp_u16(scroll), clamp_u16(h_scroll)))
            .block(block);
        f.render_widget(paragraph, area);

        if self.is_focused && inner_width > 0 && inner_height > 0 {
            f.set_cursor(area.x + 1 + column as u16, area.y + 1 + (line - scroll) as u16);
        }
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

/// Cut `text` to at most `max_width` terminal columns, ending with "..."
/// when anything was dropped
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    if max_width >= 3 {
        truncated.push_str("...");
    }
    truncated
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
