//! Test doubles shared by the use case tests.

use crate::ports::summary_gateway::{GatewayError, SummaryGateway};
use crate::ports::summary_observer::SummaryObserver;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use summary_domain::{ClarifierAnswer, Conflict, SummaryResource, SummaryState};
use tokio::sync::Notify;

type Reply<T> = Result<Vec<T>, GatewayError>;

/// Blocks clarifier requests for one session until released.
struct Gate {
    session_id: String,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

/// Gateway that replays queued replies and records every request as
/// `"<resource>:<session_id>"`.
#[derive(Default)]
pub(crate) struct MockGateway {
    clarifiers: Mutex<VecDeque<Reply<ClarifierAnswer>>>,
    conflicts: Mutex<VecDeque<Reply<Conflict>>>,
    calls: Mutex<Vec<String>>,
    gate: Mutex<Option<Gate>>,
}

impl MockGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_clarifiers(self, reply: Reply<ClarifierAnswer>) -> Self {
        self.clarifiers.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn with_conflicts(self, reply: Reply<Conflict>) -> Self {
        self.conflicts.lock().unwrap().push_back(reply);
        self
    }

    /// Hold clarifier requests for `session_id`. Returns `(started, release)`.
    pub(crate) fn hold(&self, session_id: &str) -> (Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Gate {
            session_id: session_id.to_string(),
            started: started.clone(),
            release: release.clone(),
        });
        (started, release)
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, resource: SummaryResource, session_id: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", resource, session_id));
    }

    fn gate_for(&self, session_id: &str) -> Option<(Arc<Notify>, Arc<Notify>)> {
        self.gate
            .lock()
            .unwrap()
            .as_ref()
            .filter(|gate| gate.session_id == session_id)
            .map(|gate| (gate.started.clone(), gate.release.clone()))
    }
}

fn exhausted<T>() -> Reply<T> {
    Err(GatewayError::RequestFailed("no reply queued".to_string()))
}

#[async_trait]
impl SummaryGateway for MockGateway {
    async fn clarifier_answers(
        &self,
        session_id: &str,
    ) -> Result<Vec<ClarifierAnswer>, GatewayError> {
        self.record(SummaryResource::Clarifiers, session_id);
        if let Some((started, release)) = self.gate_for(session_id) {
            started.notify_one();
            release.notified().await;
        }
        let reply = self.clarifiers.lock().unwrap().pop_front();
        reply.unwrap_or_else(exhausted)
    }

    async fn conflicts(&self, session_id: &str) -> Result<Vec<Conflict>, GatewayError> {
        self.record(SummaryResource::Conflicts, session_id);
        let reply = self.conflicts.lock().unwrap().pop_front();
        reply.unwrap_or_else(exhausted)
    }
}

/// Observer that records every callback as a short string.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SummaryObserver for RecordingObserver {
    fn on_state_change(&self, state: &SummaryState) {
        self.push(format!("state:{}", state));
    }

    fn on_fetch_start(&self, resource: SummaryResource) {
        self.push(format!("start:{}", resource));
    }

    fn on_fetch_complete(&self, resource: SummaryResource, success: bool) {
        self.push(format!("done:{}:{}", resource, success));
    }

    fn on_cycle_discarded(&self, cycle: u64) {
        self.push(format!("discarded:{}", cycle));
    }
}
