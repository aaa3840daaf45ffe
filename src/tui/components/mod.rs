//! Reusable UI components for the notes TUI

pub mod popup;

pub use popup::Notification;
