//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use super::{keys, UpdateAction, UpdateResult};
use crate::i18n::{resolve_language, TextKey};
use crate::message::Message;
use crate::state::{AppState, ViewPhase};
use crate::toast::ToastVariant;
use envjump_core::prelude::*;
use envjump_core::{reply_succeeded, LaunchReply, LaunchRequest, SelectionOutcome};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    if state.is_finished() {
        trace!("View finished, ignoring {:?}", message);
        return UpdateResult::none();
    }

    match message {
        Message::Activate => {
            if !state.activate() {
                debug!("Activate received twice, ignoring");
                return UpdateResult::none();
            }
            info!(
                "Popup activated (command: {:?})",
                state.pending_command().as_deref()
            );
            UpdateResult::action(UpdateAction::LoadStore)
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Popup dismissed");
            state.phase = ViewPhase::Dismissed;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Store Messages
        // ─────────────────────────────────────────────────────────
        Message::LanguageLoaded { language } => {
            if let Some(language) = language {
                let locale = resolve_language(state.locale, &language);
                if locale != state.locale {
                    debug!("Switching locale to {}", locale.tag());
                    state.locale = locale;
                }
            }
            UpdateResult::none()
        }

        Message::LanguageLoadFailed { error } => {
            error!("Failed to load language preference: {}", error);
            UpdateResult::none()
        }

        Message::EnvironmentsLoaded { environments } => {
            debug!("Loaded {} environment(s)", environments.len());
            state.set_environments(environments);
            state.phase = ViewPhase::Ready;
            UpdateResult::none()
        }

        Message::EnvironmentsLoadFailed { error } => {
            error!("Failed to load environments: {}", error);
            let title = state.text(TextKey::FetchEnvironments);
            state.toasts.push(title, ToastVariant::Destructive);
            state.set_environments(Default::default());
            state.phase = ViewPhase::Ready;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::HighlightNext => {
            let count = state.display_order().len();
            if count > 0 {
                state.highlighted = (state.highlighted + 1) % count;
            }
            UpdateResult::none()
        }

        Message::HighlightPrevious => {
            let count = state.display_order().len();
            if count > 0 {
                state.highlighted = (state.highlighted + count - 1) % count;
            }
            UpdateResult::none()
        }

        Message::HighlightFirst => {
            state.highlighted = 0;
            UpdateResult::none()
        }

        Message::HighlightLast => {
            state.highlighted = state.display_order().len().saturating_sub(1);
            UpdateResult::none()
        }

        Message::SelectHighlighted => match state.highlighted_name() {
            Some(name) => UpdateResult::message(Message::SelectEnvironment {
                name: name.to_string(),
            }),
            None => UpdateResult::none(),
        },

        Message::SelectEnvironment { name } => handle_select(state, name),

        // ─────────────────────────────────────────────────────────
        // Backend Messages
        // ─────────────────────────────────────────────────────────
        Message::LaunchReplied { env_name, reply } => {
            handle_launch_reply(state, &env_name, reply.as_ref())
        }

        Message::LaunchFailed { env_name, error } => {
            warn!("Launch of '{}' failed: {}", env_name, error);
            handle_launch_reply(state, &env_name, None)
        }
    }
}

/// Check the target list and, if it has URLs, dispatch one launch request
fn handle_select(state: &mut AppState, name: String) -> UpdateResult {
    if !state.environments().has_targets(&name) {
        info!("Environment '{}' has no targets, nothing to launch", name);
        let title = state.text(TextKey::NoTabsForEnv);
        state.toasts.push(title, ToastVariant::Default);
        state.last_outcome = Some(SelectionOutcome::NoTargetsForEnvironment);
        return UpdateResult::none();
    }

    let request = LaunchRequest::execute(name, state.pending_command());
    state.in_flight += 1;
    info!(
        "Launching '{}' (command: {:?}, in flight: {})",
        request.selected_env, request.command, state.in_flight
    );
    UpdateResult::action(UpdateAction::Launch { request })
}

fn handle_launch_reply(
    state: &mut AppState,
    env_name: &str,
    reply: Option<&LaunchReply>,
) -> UpdateResult {
    state.in_flight = state.in_flight.saturating_sub(1);

    if reply_succeeded(reply) {
        info!("Launch of '{}' succeeded, closing", env_name);
        state.last_outcome = Some(SelectionOutcome::LaunchSucceeded);
        state.phase = ViewPhase::Closed;
    } else {
        warn!("Launch of '{}' did not succeed: {:?}", env_name, reply);
        state.last_outcome = Some(SelectionOutcome::LaunchFailed);
        let title = state.text(TextKey::FailApp);
        state.toasts.push(title, ToastVariant::Destructive);
    }

    UpdateResult::none()
}
