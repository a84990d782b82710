//! Message processing: runs update and dispatches resulting actions

use tokio::sync::mpsc;

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use envjump_backend::{ExecutionBackend, KeyValueStore};

/// Process a message through the TEA update function, following any
/// chained messages and spawning every resulting action
pub fn process_message<S, B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<S, B>,
) where
    S: KeyValueStore + Sync + 'static,
    B: ExecutionBackend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        msg = result.message;
    }
}
