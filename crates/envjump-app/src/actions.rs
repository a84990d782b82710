//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use envjump_backend::{ExecutionBackend, KeyValueStore, ENVIRONMENTS_KEY, LANGUAGE_KEY};
use envjump_core::prelude::*;
use envjump_core::{Environments, LaunchRequest};

/// Injected collaborators used by background tasks
pub struct Services<S, B> {
    pub store: Arc<S>,
    pub backend: Arc<B>,
}

impl<S, B> Services<S, B> {
    pub fn new(store: S, backend: B) -> Self {
        Self {
            store: Arc::new(store),
            backend: Arc::new(backend),
        }
    }
}

impl<S, B> Clone for Services<S, B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            backend: Arc::clone(&self.backend),
        }
    }
}

/// Execute an action by spawning background tasks.
///
/// Results come back as messages on `msg_tx`. Send errors are ignored: once
/// the view has closed nobody is listening.
pub fn handle_action<S, B>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<S, B>,
) where
    S: KeyValueStore + Sync + 'static,
    B: ExecutionBackend + Sync + 'static,
{
    match action {
        UpdateAction::LoadStore => {
            let store = Arc::clone(&services.store);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = load_language(store.as_ref()).await;
                let _ = tx.send(msg).await;
            });

            let store = Arc::clone(&services.store);
            tokio::spawn(async move {
                let msg = load_environments(store.as_ref()).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Launch { request } => {
            let backend = Arc::clone(&services.backend);
            tokio::spawn(async move {
                let msg = launch(backend.as_ref(), request).await;
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Read the language preference
pub async fn load_language<S: KeyValueStore>(store: &S) -> Message {
    match store.get(&[LANGUAGE_KEY]).await {
        Ok(mut values) => {
            let language = match values.remove(LANGUAGE_KEY) {
                Some(Value::String(language)) => Some(language),
                Some(other) => {
                    warn!("Ignoring non-string language preference: {}", other);
                    None
                }
                None => None,
            };
            Message::LanguageLoaded { language }
        }
        Err(e) => Message::LanguageLoadFailed {
            error: e.to_string(),
        },
    }
}

/// Read and decode the environment mapping.
///
/// An absent or `null` value is an empty mapping.
pub async fn load_environments<S: KeyValueStore>(store: &S) -> Message {
    let mut values = match store.get(&[ENVIRONMENTS_KEY]).await {
        Ok(values) => values,
        Err(e) => {
            return Message::EnvironmentsLoadFailed {
                error: e.to_string(),
            }
        }
    };

    match values.remove(ENVIRONMENTS_KEY) {
        None | Some(Value::Null) => Message::EnvironmentsLoaded {
            environments: Environments::default(),
        },
        Some(value) => match serde_json::from_value::<Environments>(value) {
            Ok(environments) => Message::EnvironmentsLoaded { environments },
            Err(e) => Message::EnvironmentsLoadFailed {
                error: Error::from(e).to_string(),
            },
        },
    }
}

/// Send one launch request and turn the outcome into a message
pub async fn launch<B: ExecutionBackend>(backend: &B, request: LaunchRequest) -> Message {
    let env_name = request.selected_env.clone();
    match backend.execute(&request).await {
        Ok(reply) => Message::LaunchReplied { env_name, reply },
        Err(e) => Message::LaunchFailed {
            env_name,
            error: e.to_string(),
        },
    }
}
