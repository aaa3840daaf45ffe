//! Core traits for the notes TUI
//!
//! Panes never talk to each other. They hand a `PaneAction` back to the
//! coordinator (`App`), which decides what happens next.

use crate::models::Note;

use super::events::FetchRequest;

/// Actions that can be returned from pane event handling
#[derive(Debug, Clone, PartialEq)]
pub enum PaneAction {
    /// A row of the notes list was chosen
    SelectNote(Note),
    /// The list wants this fetch issued
    FetchNotes(FetchRequest),
    /// Save the editor contents
    Save,
    /// Ask to delete the open note
    Delete,
    /// Start a blank note
    NewNote,
    /// Set status message
    SetStatus(String),
    /// No action taken
    None,
}

/// Trait for panes with navigable lists
pub trait Navigable {
    /// Move selection up
    fn navigate_up(&mut self);

    /// Move selection down
    fn navigate_down(&mut self);

    /// Get currently selected index
    fn get_selected_index(&self) -> Option<usize>;

    /// Set selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get total number of items
    fn get_item_count(&self) -> usize;

    /// Navigate to first item
    fn navigate_to_first(&mut self) {
        if self.get_item_count() > 0 {
            self.set_selected_index(Some(0));
        }
    }

    /// Navigate to last item
    fn navigate_to_last(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            self.set_selected_index(Some(count - 1));
        }
    }
}
