//! Notes Terminal User Interface (TUI)
//!
//! Two panes side by side: the notes list with its search box, and the
//! editor for the open note. `App` coordinates them.

pub mod app;
pub mod components;
pub mod events;
pub mod handlers;
pub mod panes;
pub mod traits;
pub mod ui;

pub use app::{App, Focus};
pub use events::AppEvent;
