//! Domain types: environments, pending command, selection outcome

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of an environment. Case-sensitive, unique within [`Environments`].
pub type EnvironmentName = String;

/// Mapping of environment name to the URLs it opens, in launch order.
///
/// Serialized as a plain JSON object so it reads straight out of the
/// store document (`{"prod": ["https://..."], "dev": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environments(HashMap<EnvironmentName, Vec<String>>);

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, urls: Vec<String>) {
        self.0.insert(name.into(), urls);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// URLs for `name`, or `None` when the environment does not exist
    pub fn urls(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// True when `name` exists and has at least one URL to open
    pub fn has_targets(&self, name: &str) -> bool {
        self.urls(name).is_some_and(|urls| !urls.is_empty())
    }

    /// Environment names sorted lexicographically.
    ///
    /// This is the order used both for the numbered rows and for number-key
    /// resolution; it never reflects insertion order.
    pub fn display_order(&self) -> Vec<EnvironmentName> {
        let mut names: Vec<EnvironmentName> = self.0.keys().cloned().collect();
        names.sort();
        names
    }
}

impl FromIterator<(EnvironmentName, Vec<String>)> for Environments {
    fn from_iter<I: IntoIterator<Item = (EnvironmentName, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Optional command forwarded with every launch.
///
/// Parsed once when the popup activates. An empty string is stored as
/// `None` so "absent" and "empty" behave identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCommand(Option<String>);

impl PendingCommand {
    pub fn new(command: Option<String>) -> Self {
        Self(command.filter(|c| !c.is_empty()))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Wire form sent to the backend: the command, or `""` when there is none
    pub fn as_wire(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

/// Result of one dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Backend replied `{"success": true}`; the popup closes
    LaunchSucceeded,
    /// Backend failed, replied without `success: true`, or never replied
    LaunchFailed,
    /// Environment missing or has no URLs; no request was sent
    NoTargetsForEnvironment,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Environments {
        let mut envs = Environments::new();
        envs.insert("prod", vec!["url1".to_string()]);
        envs.insert("dev", vec!["url2".to_string(), "url3".to_string()]);
        envs
    }

    #[test]
    fn test_display_order_is_sorted_not_insertion_order() {
        assert_eq!(sample().display_order(), vec!["dev", "prod"]);
    }

    #[test]
    fn test_display_order_is_case_sensitive() {
        let envs: Environments = [
            ("beta".to_string(), vec![]),
            ("Alpha".to_string(), vec![]),
            ("alpha".to_string(), vec![]),
        ]
        .into_iter()
        .collect();

        // Uppercase sorts before lowercase
        assert_eq!(envs.display_order(), vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_display_order_empty() {
        assert!(Environments::new().display_order().is_empty());
    }

    #[test]
    fn test_has_targets() {
        let mut envs = sample();
        envs.insert("empty", vec![]);

        assert!(envs.has_targets("dev"));
        assert!(!envs.has_targets("empty"));
        assert!(!envs.has_targets("missing"));
        assert!(!envs.has_targets("DEV"));
    }

    #[test]
    fn test_urls_preserve_launch_order() {
        let envs = sample();
        assert_eq!(
            envs.urls("dev"),
            Some(&["url2".to_string(), "url3".to_string()][..])
        );
    }

    #[test]
    fn test_environments_deserialize_from_object() {
        let envs: Environments =
            serde_json::from_str(r#"{"prod": ["https://a"], "dev": []}"#).unwrap();
        assert_eq!(envs.len(), 2);
        assert!(envs.has_targets("prod"));
        assert!(!envs.has_targets("dev"));
    }

    #[test]
    fn test_environments_reject_non_object() {
        assert!(serde_json::from_str::<Environments>(r#"["prod"]"#).is_err());
        assert!(serde_json::from_str::<Environments>(r#"{"prod": "url"}"#).is_err());
    }

    #[test]
    fn test_pending_command_empty_is_none() {
        assert!(PendingCommand::new(Some(String::new())).is_none());
        assert!(PendingCommand::new(None).is_none());
        assert_eq!(PendingCommand::new(None), PendingCommand::new(Some(String::new())));
    }

    #[test]
    fn test_pending_command_wire_form() {
        assert_eq!(PendingCommand::none().as_wire(), "");
        assert_eq!(PendingCommand::new(Some("run".to_string())).as_wire(), "run");
        assert_eq!(
            PendingCommand::new(Some("run".to_string())).as_deref(),
            Some("run")
        );
    }
}
