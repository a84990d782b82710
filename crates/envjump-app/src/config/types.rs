//! Configuration types for envjump
//!
//! Defines:
//! - `Settings` - Application settings (`config.toml`)
//! - Section types for the store, the executor and the UI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (`<config dir>/envjump/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the store document lives
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Path to the JSON store document. Defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Executor invoked for every launch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Program to spawn
    #[serde(default = "default_backend_command")]
    pub command: String,

    /// Arguments passed before the request is written to stdin
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            command: default_backend_command(),
            args: Vec::new(),
        }
    }
}

fn default_backend_command() -> String {
    "envjump-exec".to_string()
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Locale used until (or unless) the store provides one
    #[serde(default = "default_language")]
    pub language: String,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_toast_duration_ms() -> u64 {
    3000
}
