//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use envjump_app::config::Settings;
use envjump_app::message::Message;
use envjump_app::state::AppState;
use envjump_app::{process_message, signals, ActivationContext, Services};
use envjump_backend::{ExecutionBackend, KeyValueStore};
use envjump_core::prelude::*;
use envjump_core::SelectionOutcome;

use super::event::KeyListener;
use super::{render, terminal};

/// Run the popup until a launch succeeds or the user dismisses it.
///
/// Returns the outcome of the last selection attempt, if any.
pub async fn run<S, B>(
    activation: ActivationContext,
    settings: Settings,
    services: Services<S, B>,
) -> Result<Option<SelectionOutcome>>
where
    S: KeyValueStore + Sync + 'static,
    B: ExecutionBackend + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_settings(activation, settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    let result = {
        let _listener = KeyListener::spawn(msg_tx.clone());
        process_message(&mut state, Message::Activate, &msg_tx, &services);
        run_loop(&mut term, &mut state, msg_rx, &msg_tx, &services).await
    };

    ratatui::restore();

    info!(
        "Popup finished: phase={:?} outcome={:?}",
        state.phase, state.last_outcome
    );
    result.map(|_| state.last_outcome)
}

async fn run_loop<S, B>(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<S, B>,
) -> Result<()>
where
    S: KeyValueStore + Sync + 'static,
    B: ExecutionBackend + Sync + 'static,
{
    term.draw(|frame| render::view(frame, state))
        .context("Failed to draw popup")?;

    while !state.should_quit() {
        let Some(msg) = msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };
        process_message(state, msg, msg_tx, services);

        // Drain whatever else is queued before redrawing
        while !state.should_quit() {
            match msg_rx.try_recv() {
                Ok(msg) => process_message(state, msg, msg_tx, services),
                Err(_) => break,
            }
        }

        if !state.should_quit() {
            term.draw(|frame| render::view(frame, state))
                .context("Failed to draw popup")?;
        }
    }

    Ok(())
}
