//! Popup state (Model in TEA pattern)

use std::time::Duration;

use crate::activation::ActivationContext;
use crate::config::Settings;
use crate::i18n::{self, Locale, TextKey};
use crate::toast::ToastQueue;
use envjump_core::prelude::*;
use envjump_core::{EnvironmentName, Environments, PendingCommand, SelectionOutcome};

/// Number-key resolution compares keys as strings, so rows past this count
/// are only reachable with the arrow keys.
pub const MAX_NUMBERED_ROWS: usize = 9;

/// Lifecycle of the popup view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Waiting for the environment read
    #[default]
    Loading,
    /// Environments known (possibly empty); accepting selections
    Ready,
    /// A launch succeeded and the view closed
    Closed,
    /// The user dismissed the view
    Dismissed,
}

/// Complete popup state
#[derive(Debug)]
pub struct AppState {
    pub phase: ViewPhase,

    environments: Environments,

    /// Sorted key set of `environments`, recomputed on every replace
    display_order: Vec<EnvironmentName>,

    activation: ActivationContext,

    /// Set once on activation, never changed afterwards
    pending_command: PendingCommand,

    activated: bool,

    pub locale: Locale,

    pub toasts: ToastQueue,

    /// Index into the display order
    pub highlighted: usize,

    /// Launch requests sent but not yet answered
    pub in_flight: usize,

    pub last_outcome: Option<SelectionOutcome>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(ActivationContext::default(), Settings::default())
    }
}

impl AppState {
    pub fn new(activation: ActivationContext) -> Self {
        Self::with_settings(activation, Settings::default())
    }

    pub fn with_settings(activation: ActivationContext, settings: Settings) -> Self {
        let locale = Locale::from_tag(&settings.ui.language).unwrap_or_default();
        let toasts = ToastQueue::new(Duration::from_millis(settings.ui.toast_duration_ms));

        Self {
            phase: ViewPhase::Loading,
            environments: Environments::default(),
            display_order: Vec::new(),
            activation,
            pending_command: PendingCommand::none(),
            activated: false,
            locale,
            toasts,
            highlighted: 0,
            in_flight: 0,
            last_outcome: None,
            settings,
        }
    }

    /// Parse the pending command from the activation context.
    ///
    /// Returns `false` if the view was already activated; the command is
    /// only ever parsed once.
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.pending_command = self.activation.pending_command();
        self.activated = true;
        true
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn pending_command(&self) -> &PendingCommand {
        &self.pending_command
    }

    pub fn environments(&self) -> &Environments {
        &self.environments
    }

    pub fn display_order(&self) -> &[EnvironmentName] {
        &self.display_order
    }

    /// Replace the mapping and recompute the display order
    pub fn set_environments(&mut self, environments: Environments) {
        self.display_order = environments.display_order();
        self.environments = environments;

        if self.display_order.len() > MAX_NUMBERED_ROWS {
            warn!(
                "{} environments loaded; number keys only reach some rows",
                self.display_order.len()
            );
        }

        self.highlighted = self
            .highlighted
            .min(self.display_order.len().saturating_sub(1));
    }

    pub fn highlighted_name(&self) -> Option<&str> {
        self.display_order.get(self.highlighted).map(String::as_str)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    /// The view is gone and no further message has any effect
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, ViewPhase::Closed | ViewPhase::Dismissed)
    }

    pub fn should_quit(&self) -> bool {
        self.is_finished()
    }

    /// Localized text for the current locale
    pub fn text(&self, key: TextKey) -> &'static str {
        i18n::t(self.locale, key)
    }
}
