//! Execution backend: the process that actually opens an environment's tabs
//!
//! The protocol is one request line in, one reply line out:
//!
//! ```text
//! -> {"action":"executeMainFunction","selectedEnv":"dev","command":"run"}
//! <- {"success":true}
//! ```

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

use envjump_core::prelude::*;
use envjump_core::{LaunchReply, LaunchRequest};

/// Sends launch requests to whatever performs the tab-opening
#[trait_variant::make(ExecutionBackend: Send)]
pub trait LocalExecutionBackend {
    /// Send one request and wait for its reply.
    ///
    /// `Ok(None)` means the backend finished without replying, which callers
    /// treat the same as a failed launch.
    async fn execute(&self, request: &LaunchRequest) -> Result<Option<LaunchReply>>;
}

/// Backend that spawns an executor program per request
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: String,
    args: Vec<String>,
}

impl ProcessBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ExecutionBackend for ProcessBackend {
    async fn execute(&self, request: &LaunchRequest) -> Result<Option<LaunchReply>> {
        info!(
            "Dispatching {} for '{}' via {}",
            request.action, request.selected_env, self.program
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::backend_spawn(format!("{}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::backend("executor stdin unavailable"))?;
        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        stdin.write_all(line.as_bytes()).await?;
        stdin.flush().await?;
        // Close stdin so the executor sees EOF after the request
        drop(stdin);

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::backend("executor stdout unavailable"))?;
        let mut lines = BufReader::new(stdout).lines();

        let mut reply = None;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            reply = LaunchReply::parse(&line);
            if reply.is_none() {
                warn!("Executor replied with unparseable line: {}", line);
            }
            break;
        }
        drop(lines);

        // The reply is final; the executor may keep running after it
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => debug!("Executor exited with {}", status),
                Err(e) => warn!("Failed to reap executor: {}", e),
            }
        });

        Ok(reply)
    }
}
