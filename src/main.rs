//! envjump - jump to a named set of URLs from the terminal
//!
//! Binary entry point: parses arguments, loads configuration and hands the
//! popup to the TUI runner.

use std::path::PathBuf;

use clap::Parser;
use envjump_app::config::{self, Settings, CONFIG_DIR_ENV};
use envjump_app::{ActivationContext, Services};
use envjump_backend::{JsonFileStore, ProcessBackend};
use envjump_core::prelude::*;
use envjump_core::SelectionOutcome;

/// envjump - pick an environment and open its tabs
#[derive(Parser, Debug)]
#[command(name = "envjump")]
#[command(about = "Pick a named environment and open its URLs", long_about = None)]
struct Args {
    /// Activation query string, e.g. "?command=run"
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Command forwarded with the launch (shorthand for --query command=CMD)
    #[arg(long, value_name = "CMD", conflicts_with = "query")]
    command: Option<String>,

    /// Store document to read environments from
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Executor program that opens the tabs
    #[arg(long, value_name = "PROGRAM")]
    executor: Option<String>,

    /// Configuration directory (overrides ENVJUMP_CONFIG_DIR)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

impl Args {
    fn activation(&self) -> ActivationContext {
        match (&self.query, &self.command) {
            (Some(query), _) => ActivationContext::from_location(query),
            (None, Some(command)) => ActivationContext::for_command(command),
            (None, None) => ActivationContext::default(),
        }
    }

    /// Apply command-line overrides on top of the file settings
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(store) = &self.store {
            settings.store.path = Some(store.clone());
        }
        if let Some(executor) = &self.executor {
            settings.backend.command = executor.clone();
            settings.backend.args.clear();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    envjump_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("envjump starting");
    info!("═══════════════════════════════════════════════════════");

    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or_else(config::config_directory);
    debug!("Config directory: {} (env {})", config_dir.display(), CONFIG_DIR_ENV);

    let mut settings = config::load_settings(&config_dir);
    args.apply_overrides(&mut settings);

    let store = JsonFileStore::new(config::store_path(&settings));
    let backend = ProcessBackend::new(
        settings.backend.command.clone(),
        settings.backend.args.clone(),
    );
    info!(
        "Store: {}, executor: {}",
        store.path().display(),
        backend.program()
    );

    let result = envjump_tui::run(args.activation(), settings, Services::new(store, backend)).await;

    match &result {
        Ok(Some(SelectionOutcome::LaunchSucceeded)) => info!("Environment launched"),
        Ok(_) => info!("Popup dismissed"),
        Err(e) => error!("Application error: {:?}", e),
    }

    info!("envjump exiting");
    result.map(|_| ())
}
