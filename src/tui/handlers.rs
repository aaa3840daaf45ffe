//! Common event handlers for the notes TUI
//!
//! Reusable key handling shared by the panes and the coordinator.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::traits::{Navigable, PaneAction};
use super::ui::{InputField, TextArea};

/// Shortcuts that work regardless of which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    Save,
    NewNote,
    Delete,
    ToggleHelp,
    FocusNext,
    FocusPrevious,
}

/// Common keyboard event handling utilities
pub struct CommonKeyHandler;

impl CommonKeyHandler {
    /// Handle navigation keys for list-based panes
    pub fn handle_navigation_keys<T: Navigable>(navigable: &mut T, key: KeyEvent) -> Option<PaneAction> {
        match key.code {
            KeyCode::Up => {
                navigable.navigate_up();
                Some(PaneAction::None)
            }
            KeyCode::Down => {
                navigable.navigate_down();
                Some(PaneAction::None)
            }
            KeyCode::Home => {
                navigable.navigate_to_first();
                Some(PaneAction::SetStatus("First note".to_string()))
            }
            KeyCode::End => {
                navigable.navigate_to_last();
                Some(PaneAction::SetStatus("Last note".to_string()))
            }
            _ => None,
        }
    }

    /// Handle editing keys for a single-line field.
    /// Returns `Some(true)` when the value changed, `Some(false)` when only the
    /// cursor moved, `None` when the key is not an editing key.
    pub fn handle_input_keys(input: &mut InputField, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char(c) if is_text_input(&key) => {
                input.insert_char(c);
                Some(true)
            }
            KeyCode::Backspace => Some(input.delete_char()),
            KeyCode::Delete => Some(input.delete_char_forward()),
            KeyCode::Left => {
                input.move_cursor_left();
                Some(false)
            }
            KeyCode::Right => {
                input.move_cursor_right();
                Some(false)
            }
            KeyCode::Home => {
                input.move_cursor_to_start();
                Some(false)
            }
            KeyCode::End => {
                input.move_cursor_to_end();
                Some(false)
            }
            _ => None,
        }
    }

    /// Handle editing keys for a multi-line area; same return convention as
    /// `handle_input_keys`
    pub fn handle_text_area_keys(area: &mut TextArea, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char(c) if is_text_input(&key) => {
                area.insert_char(c);
                Some(true)
            }
            KeyCode::Enter => {
                area.insert_newline();
                Some(true)
            }
            KeyCode::Backspace => Some(area.delete_char()),
            KeyCode::Delete => Some(area.delete_char_forward()),
            KeyCode::Left => {
                area.move_cursor_left();
                Some(false)
            }
            KeyCode::Right => {
                area.move_cursor_right();
                Some(false)
            }
            KeyCode::Up => {
                area.move_cursor_up();
                Some(false)
            }
            KeyCode::Down => {
                area.move_cursor_down();
                Some(false)
            }
            KeyCode::Home => {
                area.move_cursor_to_line_start();
                Some(false)
            }
            KeyCode::End => {
                area.move_cursor_to_line_end();
                Some(false)
            }
            _ => None,
        }
    }

    /// Handle global application keys
    pub fn handle_global_keys(key: KeyEvent) -> Option<GlobalAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(GlobalAction::Quit),
            KeyCode::Char('s') if ctrl => Some(GlobalAction::Save),
            KeyCode::Char('n') if ctrl => Some(GlobalAction::NewNote),
            KeyCode::Char('d') if ctrl => Some(GlobalAction::Delete),
            KeyCode::F(1) => Some(GlobalAction::ToggleHelp),
            KeyCode::Tab => Some(GlobalAction::FocusNext),
            KeyCode::BackTab => Some(GlobalAction::FocusPrevious),
            _ => None,
        }
    }
}

/// Plain or shifted characters; control and alt chords are shortcuts
fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
