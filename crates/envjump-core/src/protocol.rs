//! Wire messages exchanged with the execution backend

use serde::{Deserialize, Serialize};

use crate::types::PendingCommand;

/// Action identifier understood by the executor
pub const EXECUTE_MAIN_FUNCTION: &str = "executeMainFunction";

/// Outbound launch request
///
/// Serializes as
/// `{"action":"executeMainFunction","selectedEnv":"dev","command":"run"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub action: String,
    pub selected_env: String,
    pub command: String,
}

impl LaunchRequest {
    pub fn execute(selected_env: impl Into<String>, command: &PendingCommand) -> Self {
        Self {
            action: EXECUTE_MAIN_FUNCTION.to_string(),
            selected_env: selected_env.into(),
            command: command.as_wire().to_string(),
        }
    }
}

/// Inbound reply from the executor
///
/// Only an explicit `"success": true` counts as success; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl LaunchReply {
    pub fn success() -> Self {
        Self {
            success: Some(true),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: Some(false),
        }
    }

    /// Parse one reply line. Anything that is not a JSON object yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str(line.trim()).ok()
    }

    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

/// A missing reply is treated the same as a failed one.
pub fn reply_succeeded(reply: Option<&LaunchReply>) -> bool {
    reply.is_some_and(LaunchReply::is_success)
}
