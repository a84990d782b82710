//! envjump-app - Popup state and orchestration for envjump
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! environment selection popup: state, messages, the update function, the
//! actions that talk to the store and the executor, configuration loading,
//! localized text and toast notifications.

pub mod actions;
pub mod activation;
pub mod config;
pub mod handler;
pub mod i18n;
pub mod input_key;
pub mod message;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use actions::Services;
pub use activation::ActivationContext;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, ViewPhase};
