//! End-to-end controller flow: activation, store reads, key resolution and
//! launch replies, driven through the real message loop with in-memory
//! collaborators.

use std::sync::Arc;
use std::time::Duration;

use envjump_app::state::ViewPhase;
use envjump_app::{process_message, ActivationContext, AppState, InputKey, Message, Services};
use envjump_backend::test_utils::{MemoryStore, RecordingBackend, ScriptedReply};
use envjump_backend::{ExecutionBackend, KeyValueStore, ENVIRONMENTS_KEY, LANGUAGE_KEY};
use envjump_core::{LaunchReply, LaunchRequest, SelectionOutcome};
use serde_json::json;
use tokio::sync::mpsc;

struct Harness<S, B> {
    state: AppState,
    services: Services<S, B>,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl<S, B> Harness<S, B>
where
    S: KeyValueStore + Sync + 'static,
    B: ExecutionBackend + Sync + 'static,
{
    fn new(query: &str, store: S, backend: B) -> Self {
        let (tx, rx) = mpsc::channel(64);
        Self {
            state: AppState::new(ActivationContext::from_query(query)),
            services: Services::new(store, backend),
            tx,
            rx,
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &self.tx, &self.services);
    }

    fn press(&mut self, key: char) {
        self.send(Message::Key(InputKey::Char(key)));
    }

    /// Feed `count` background results back into the loop
    async fn settle(&mut self, count: usize) {
        for _ in 0..count {
            let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for background message")
                .expect("channel closed");
            self.send(msg);
        }
    }

    /// Activate and wait for both store reads
    async fn activate(&mut self) {
        self.send(Message::Activate);
        self.settle(2).await;
    }
}

fn scenario_store() -> MemoryStore {
    MemoryStore::new().with_value(
        ENVIRONMENTS_KEY,
        json!({"prod": ["url1"], "dev": ["url2", "url3"]}),
    )
}

fn request(env: &str, command: &str) -> LaunchRequest {
    LaunchRequest {
        action: "executeMainFunction".to_string(),
        selected_env: env.to_string(),
        command: command.to_string(),
    }
}

#[tokio::test]
async fn test_number_keys_dispatch_in_sorted_order() {
    let mut h = Harness::new(
        "?command=run",
        scenario_store(),
        RecordingBackend::replying(ScriptedReply::NoReply),
    );
    h.activate().await;
    assert_eq!(h.state.display_order(), &["dev", "prod"]);

    h.press('1');
    h.settle(1).await;
    h.press('2');
    h.settle(1).await;
    h.press('3');

    let backend = Arc::clone(&h.services.backend);
    assert_eq!(
        backend.requests(),
        vec![request("dev", "run"), request("prod", "run")]
    );
    assert_eq!(h.state.phase, ViewPhase::Ready);
}

#[tokio::test]
async fn test_success_reply_closes_popup() {
    let mut h = Harness::new("", scenario_store(), RecordingBackend::succeeding());
    h.activate().await;

    h.press('2');
    h.settle(1).await;

    assert_eq!(h.state.phase, ViewPhase::Closed);
    assert_eq!(h.state.last_outcome, Some(SelectionOutcome::LaunchSucceeded));
    assert_eq!(h.services.backend.requests(), vec![request("prod", "")]);
}

#[tokio::test]
async fn test_failed_reply_keeps_popup_open_with_destructive_toast() {
    let mut h = Harness::new("", scenario_store(), RecordingBackend::failing());
    h.activate().await;

    h.press('1');
    h.settle(1).await;

    assert_eq!(h.state.phase, ViewPhase::Ready);
    assert_eq!(h.state.last_outcome, Some(SelectionOutcome::LaunchFailed));
    assert!(h.state.toasts.latest().unwrap().is_destructive());
}

#[tokio::test]
async fn test_transport_error_keeps_popup_open() {
    let mut h = Harness::new(
        "",
        scenario_store(),
        RecordingBackend::replying(ScriptedReply::Error("executor crashed".to_string())),
    );
    h.activate().await;

    h.press('1');
    h.settle(1).await;

    assert!(!h.state.should_quit());
    assert_eq!(h.state.in_flight, 0);
    assert_eq!(h.state.toasts.latest().unwrap().title, "Operation failed");
}

#[tokio::test]
async fn test_empty_store_every_key_is_noop() {
    let mut h = Harness::new("", MemoryStore::new(), RecordingBackend::succeeding());
    h.activate().await;

    for key in ['0', '1', '2', '9'] {
        h.press(key);
    }

    assert!(h.state.environments().is_empty());
    assert!(h.services.backend.requests().is_empty());
    assert!(h.state.toasts.is_empty());
}

#[tokio::test]
async fn test_environment_without_targets_sends_nothing() {
    let store = MemoryStore::new().with_value(ENVIRONMENTS_KEY, json!({"a": []}));
    let mut h = Harness::new("", store, RecordingBackend::succeeding());
    h.activate().await;

    h.press('1');

    assert!(h.services.backend.requests().is_empty());
    assert_eq!(
        h.state.last_outcome,
        Some(SelectionOutcome::NoTargetsForEnvironment)
    );
    assert!(!h.state.toasts.latest().unwrap().is_destructive());
}

#[tokio::test]
async fn test_store_failure_falls_back_to_empty_with_toast() {
    let store = MemoryStore::new()
        .with_value(LANGUAGE_KEY, json!("pt"))
        .failing_on(ENVIRONMENTS_KEY);
    let mut h = Harness::new("", store, RecordingBackend::succeeding());
    h.activate().await;

    assert_eq!(h.state.phase, ViewPhase::Ready);
    assert!(h.state.environments().is_empty());
    let toast = h.state.toasts.latest().unwrap();
    assert!(toast.is_destructive());
    // Language read still applied; the two reads finish in either order
    assert_eq!(h.state.locale.tag(), "pt");
}

#[tokio::test]
async fn test_late_reply_after_dismiss_is_ignored() {
    let mut h = Harness::new(
        "",
        scenario_store(),
        RecordingBackend::replying(ScriptedReply::Reply(LaunchReply::failure())),
    );
    h.activate().await;

    h.press('1');
    h.send(Message::Quit);
    h.settle(1).await;

    assert_eq!(h.state.phase, ViewPhase::Dismissed);
    assert!(h.state.toasts.is_empty());
}

#[cfg(unix)]
mod process_backend {
    use super::*;
    use envjump_backend::{JsonFileStore, ProcessBackend};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_and_process_executor() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::in_directory(dir.path());
        std::fs::write(
            store.path(),
            r#"{"lng": "es", "environments": {"prod": ["url1"], "dev": ["url2"]}}"#,
        )
        .unwrap();

        let script = r#"read line
case "$line" in
  *'"selectedEnv":"dev"'*'"command":"run"'*) echo '{"success": true}' ;;
  *) echo '{"success": false}' ;;
esac"#;
        let backend = ProcessBackend::new("sh", vec!["-c".to_string(), script.to_string()]);

        let mut h = Harness::new("?command=run", store, backend);
        h.activate().await;
        assert_eq!(h.state.locale.tag(), "es");

        h.press('2');
        h.settle(1).await;
        assert_eq!(h.state.phase, ViewPhase::Ready);
        assert_eq!(h.state.toasts.latest().unwrap().title, "La operación falló");

        h.press('1');
        h.settle(1).await;
        assert_eq!(h.state.phase, ViewPhase::Closed);
    }
}
