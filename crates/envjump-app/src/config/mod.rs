//! Configuration file parsing for envjump
//!
//! Supports:
//! - `<config dir>/envjump/config.toml` - store location, executor command, UI options

pub mod settings;
pub mod types;

pub use settings::{config_directory, load_settings, store_path, CONFIG_DIR_ENV};
pub use types::*;
