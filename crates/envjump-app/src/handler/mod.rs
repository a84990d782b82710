//! Handler module - TEA update function and key handling
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key to message translation

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use envjump_core::LaunchRequest;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Side effects the event loop performs after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Read the language preference and the environment mapping.
    /// The two reads run independently and may finish in any order.
    LoadStore,

    /// Send one launch request to the execution backend
    Launch { request: LaunchRequest },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
