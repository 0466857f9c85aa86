//! promptdesk-tui - Terminal UI for PromptDesk
//!
//! Renders the application state from `promptdesk-app` with ratatui and feeds
//! crossterm key events back into its update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
