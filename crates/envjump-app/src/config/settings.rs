//! Settings parser for `config.toml`

use super::types::Settings;
use envjump_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "envjump";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "ENVJUMP_CONFIG_DIR";

/// Resolve the configuration directory.
///
/// `ENVJUMP_CONFIG_DIR` wins when set and non-empty, otherwise
/// `<platform config dir>/envjump`.
pub fn config_directory() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `<config_dir>/config.toml`
///
/// Never fails: a missing file or a parse error falls back to defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path)
        .map_err(Error::from)
        .and_then(|content| parse_settings(&content))
    {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}, using defaults: {}", config_path, e);
            Settings::default()
        }
    }
}

fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(e.to_string()))
}

/// Path of the store document: the configured path, or
/// `<data dir>/envjump/storage.json`
pub fn store_path(settings: &Settings) -> PathBuf {
    settings
        .store
        .path
        .clone()
        .unwrap_or_else(|| envjump_core::logging::data_directory().join("storage.json"))
}
