//! Abstract input key event, independent of terminal library.
//!
//! Keeps envjump-app free of crossterm types; the TUI converts its key
//! events into `InputKey` at the boundary.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (digits, letters, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
