//! envjump-tui - Terminal UI for envjump
//!
//! Renders the environment popup with ratatui and feeds terminal key events
//! into the controller from envjump-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
