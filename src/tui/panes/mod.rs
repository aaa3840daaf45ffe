//! The two panes of the main screen

pub mod editor;
pub mod notes_list;

pub use editor::EditorPane;
pub use notes_list::{FetchOutcome, ListDisplay, NotesListPane};
