//! Activation context: the query string the popup was opened with

use envjump_core::prelude::*;
use envjump_core::PendingCommand;
use url::Url;

/// Query parameter carrying the pending command
pub const COMMAND_PARAM: &str = "command";

/// Context the popup was activated with.
///
/// Holds the raw query string (leading `?` optional). It is read exactly
/// once, when the controller activates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationContext {
    query: String,
}

impl ActivationContext {
    /// Context from a bare query string such as `?command=run`
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Context from a full location (`popup.html?command=run`) or a bare
    /// query string. Only the query component is kept.
    pub fn from_location(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) => Self::from_query(url.query().unwrap_or_default()),
            Err(_) => match location.split_once('?') {
                Some((_, query)) => Self::from_query(query),
                None => Self::from_query(location),
            },
        }
    }

    /// Context carrying only `command=<command>`
    pub fn for_command(command: &str) -> Self {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(COMMAND_PARAM, command)
            .finish();
        Self::from_query(query)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Parse the `command` parameter. The first occurrence wins; an empty
    /// value is the same as no command.
    pub fn pending_command(&self) -> PendingCommand {
        let query = self.query.trim_start_matches('?');
        let command = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == COMMAND_PARAM)
            .map(|(_, value)| value.into_owned());
        debug!("Pending command from activation: {:?}", command);
        PendingCommand::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_query_with_question_mark() {
        let ctx = ActivationContext::from_query("?command=run");
        assert_eq!(ctx.pending_command().as_deref(), Some("run"));
    }

    #[test]
    fn test_command_from_query_without_question_mark() {
        let ctx = ActivationContext::from_query("foo=1&command=deploy");
        assert_eq!(ctx.pending_command().as_deref(), Some("deploy"));
    }

    #[test]
    fn test_command_is_percent_decoded() {
        let ctx = ActivationContext::from_query("?command=npm%20run+dev");
        assert_eq!(ctx.pending_command().as_deref(), Some("npm run dev"));
    }

    #[test]
    fn test_missing_or_empty_command_is_none() {
        assert!(ActivationContext::from_query("").pending_command().is_none());
        assert!(ActivationContext::from_query("?other=1")
            .pending_command()
            .is_none());
        assert!(ActivationContext::from_query("?command=")
            .pending_command()
            .is_none());
    }

    #[test]
    fn test_first_command_wins() {
        let ctx = ActivationContext::from_query("command=a&command=b");
        assert_eq!(ctx.pending_command().as_deref(), Some("a"));
    }

    #[test]
    fn test_for_command_round_trips_special_characters() {
        let ctx = ActivationContext::for_command("npm run dev&x=1");
        assert_eq!(ctx.pending_command().as_deref(), Some("npm run dev&x=1"));
    }

    #[test]
    fn test_from_location_full_url() {
        let ctx = ActivationContext::from_location("chrome-extension://abc/popup.html?command=run");
        assert_eq!(ctx.query(), "command=run");
        assert_eq!(ctx.pending_command().as_deref(), Some("run"));
    }

    #[test]
    fn test_from_location_relative_path() {
        let ctx = ActivationContext::from_location("popup.html?command=build");
        assert_eq!(ctx.pending_command().as_deref(), Some("build"));
    }

    #[test]
    fn test_from_location_bare_query() {
        let ctx = ActivationContext::from_location("command=test");
        assert_eq!(ctx.pending_command().as_deref(), Some("test"));
    }
}
