//! Localized text catalog
//!
//! Three built-in catalogs (`en`, `es`, `pt`). The active locale comes from
//! the stored `lng` preference, falling back to the configured language.

use envjump_core::prelude::*;

/// Supported UI languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
    Pt,
}

impl Locale {
    /// Parse a language tag. Region subtags (`pt-BR`, `es_MX`) fall back to
    /// their base language; unknown languages yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let base = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match base.as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Pt => "pt",
        }
    }
}

/// Catalog keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    /// `popup_title`
    PopupTitle,
    /// `alert.create_env`
    CreateEnv,
    /// `alert.no_tabs_for_env`
    NoTabsForEnv,
    /// `error.fail_app`
    FailApp,
    /// `error.fetch_environments`
    FetchEnvironments,
    /// `status.loading`
    Loading,
    /// `status.launching`
    Launching,
    /// `help.keys`
    HelpKeys,
}

impl TextKey {
    /// Dotted catalog identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::PopupTitle => "popup_title",
            Self::CreateEnv => "alert.create_env",
            Self::NoTabsForEnv => "alert.no_tabs_for_env",
            Self::FailApp => "error.fail_app",
            Self::FetchEnvironments => "error.fetch_environments",
            Self::Loading => "status.loading",
            Self::Launching => "status.launching",
            Self::HelpKeys => "help.keys",
        }
    }
}

/// Look up `key` in the catalog for `locale`
pub fn t(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Es => es(key),
        Locale::Pt => pt(key),
    }
}

/// Resolve a stored language preference.
///
/// Empty or unknown values leave `current` unchanged.
pub fn resolve_language(current: Locale, language: &str) -> Locale {
    if language.trim().is_empty() {
        return current;
    }
    match Locale::from_tag(language) {
        Some(locale) => locale,
        None => {
            warn!("Unsupported language {:?}, keeping {}", language, current.tag());
            current
        }
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::PopupTitle => "Select an environment",
        TextKey::CreateEnv => "Create an environment to get started",
        TextKey::NoTabsForEnv => "No tabs for this environment",
        TextKey::FailApp => "Operation failed",
        TextKey::FetchEnvironments => "Failed to retrieve environments",
        TextKey::Loading => "Loading environments…",
        TextKey::Launching => "Launching…",
        TextKey::HelpKeys => "select  ↑↓ move  Enter open  Esc close",
    }
}

fn es(key: TextKey) -> &'static str {
    match key {
        TextKey::PopupTitle => "Selecciona un entorno",
        TextKey::CreateEnv => "Crea un entorno para empezar",
        TextKey::NoTabsForEnv => "No hay pestañas para este entorno",
        TextKey::FailApp => "La operación falló",
        TextKey::FetchEnvironments => "No se pudieron obtener los entornos",
        TextKey::Loading => "Cargando entornos…",
        TextKey::Launching => "Abriendo…",
        TextKey::HelpKeys => "elegir  ↑↓ mover  Enter abrir  Esc cerrar",
    }
}

fn pt(key: TextKey) -> &'static str {
    match key {
        TextKey::PopupTitle => "Selecione um ambiente",
        TextKey::CreateEnv => "Crie um ambiente para começar",
        TextKey::NoTabsForEnv => "Nenhuma aba para este ambiente",
        TextKey::FailApp => "A operação falhou",
        TextKey::FetchEnvironments => "Falha ao recuperar os ambientes",
        TextKey::Loading => "Carregando ambientes…",
        TextKey::Launching => "Abrindo…",
        TextKey::HelpKeys => "escolher  ↑↓ mover  Enter abrir  Esc fechar",
    }
}
