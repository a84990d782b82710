//! In-memory collaborators for tests
//!
//! Provides a [`MemoryStore`] that can be told to fail on particular keys and
//! a [`RecordingBackend`] that captures every request it receives.

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::Value;

use envjump_core::prelude::*;
use envjump_core::{LaunchReply, LaunchRequest};

use crate::executor::ExecutionBackend;
use crate::store::{KeyValueStore, StoreValues};

/// Store holding values in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: StoreValues,
    failing_keys: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`
    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Make every read that includes `key` fail
    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<StoreValues> {
        if let Some(key) = keys.iter().find(|k| self.failing_keys.contains(**k)) {
            return Err(Error::store_read(format!("simulated failure for '{}'", key)));
        }
        Ok(keys
            .iter()
            .filter_map(|k| self.values.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }
}

/// What a [`RecordingBackend`] answers with
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Reply(LaunchReply),
    NoReply,
    Error(String),
}

/// Backend that records requests and answers with a scripted reply
#[derive(Debug)]
pub struct RecordingBackend {
    reply: ScriptedReply,
    requests: Mutex<Vec<LaunchRequest>>,
}

impl RecordingBackend {
    pub fn replying(reply: ScriptedReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend that always answers `{"success": true}`
    pub fn succeeding() -> Self {
        Self::replying(ScriptedReply::Reply(LaunchReply::success()))
    }

    /// Backend that always answers `{"success": false}`
    pub fn failing() -> Self {
        Self::replying(ScriptedReply::Reply(LaunchReply::failure()))
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<LaunchRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl ExecutionBackend for RecordingBackend {
    async fn execute(&self, request: &LaunchRequest) -> Result<Option<LaunchReply>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match &self.reply {
            ScriptedReply::Reply(reply) => Ok(Some(reply.clone())),
            ScriptedReply::NoReply => Ok(None),
            ScriptedReply::Error(message) => Err(Error::backend(message.clone())),
        }
    }
}
