//! Message types for the controller (TEA pattern)

use crate::input_key::InputKey;
use envjump_core::{EnvironmentName, Environments, LaunchReply};

/// All possible messages/actions in the popup
#[derive(Debug, Clone)]
pub enum Message {
    /// View mounted: parse the pending command and start the store reads
    Activate,

    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick for toast expiry
    Tick,

    /// Dismiss the view (Esc, q, Ctrl+C, SIGINT, SIGTERM)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Store Messages
    // ─────────────────────────────────────────────────────────
    /// Language read finished. `None` when no preference is stored.
    LanguageLoaded { language: Option<String> },

    /// Language read failed
    LanguageLoadFailed { error: String },

    /// Environment read finished (absent key decodes to an empty mapping)
    EnvironmentsLoaded { environments: Environments },

    /// Environment read failed or the stored value did not decode
    EnvironmentsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move highlight down one row
    HighlightNext,

    /// Move highlight up one row
    HighlightPrevious,

    /// Jump to the first row
    HighlightFirst,

    /// Jump to the last row
    HighlightLast,

    /// Select the highlighted row
    SelectHighlighted,

    /// Select an environment by name with the pending command
    SelectEnvironment { name: EnvironmentName },

    // ─────────────────────────────────────────────────────────
    // Backend Messages
    // ─────────────────────────────────────────────────────────
    /// Backend answered (or closed without answering: `reply` is `None`)
    LaunchReplied {
        env_name: EnvironmentName,
        reply: Option<LaunchReply>,
    },

    /// Request could not be delivered
    LaunchFailed {
        env_name: EnvironmentName,
        error: String,
    },
}
