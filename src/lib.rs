//! Terminal client for a remote notes service
//!
//! `api` talks to the REST backend, `tui` is the interactive two-pane
//! interface and `cli` the one-shot commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod tui;
