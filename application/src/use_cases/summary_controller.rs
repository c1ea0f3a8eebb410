//! Summary Controller
//!
//! Owns the state of one summary view. Every change of the
//! `(session_id, user_id)` pair starts a new fetch cycle; the previous cycle
//! is cancelled and whatever it still produces is dropped.
//!
//! ```text
//! update(ctx) ──▶ key changed? ──no──▶ current state
//!                      │
//!                     yes ──▶ cancel previous cycle, cycle += 1
//!                               │
//!                     key? ─none─▶ Idle
//!                               │
//!                             Loading ──▶ LoadSummaryUseCase ──▶ Loaded | Failed
//!                                                 (dropped if cycle was superseded)
//! ```

use crate::ports::summary_observer::{NoObserver, SummaryObserver};
use crate::use_cases::load_summary::{LoadSummaryError, LoadSummaryUseCase};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use summary_domain::{SessionContext, SessionKey, SummaryState};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Mutable view state, guarded by the controller's lock.
#[derive(Default)]
struct ViewState {
    key: Option<SessionKey>,
    /// Number of the most recently started cycle
    cycle: u64,
    /// Token of the in-flight cycle, if any
    cancellation: Option<CancellationToken>,
    state: SummaryState,
}

/// Controller for the summary view
///
/// The lock is never held across an `.await`; a cycle takes its number and
/// token under the lock, fetches without it, and re-checks the number before
/// writing its result back.
pub struct SummaryController {
    use_case: LoadSummaryUseCase,
    observer: Arc<dyn SummaryObserver>,
    view: Mutex<ViewState>,
}

impl SummaryController {
    pub fn new(use_case: LoadSummaryUseCase) -> Self {
        Self {
            use_case,
            observer: Arc::new(NoObserver),
            view: Mutex::new(ViewState::default()),
        }
    }

    /// Create with an observer for state changes and request progress.
    pub fn with_observer(mut self, observer: Arc<dyn SummaryObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Current view state.
    pub fn state(&self) -> SummaryState {
        self.lock().state.clone()
    }

    /// Number of cycles started so far.
    pub fn cycle(&self) -> u64 {
        self.lock().cycle
    }

    /// Apply a (possibly unchanged) session context.
    ///
    /// Runs a full fetch cycle when the identifier pair changed and returns
    /// the view state afterwards. An unchanged pair returns the current state
    /// without touching the network.
    pub async fn update(&self, context: &SessionContext) -> SummaryState {
        let key = context.fetch_key();

        let (cycle, token, key) = {
            let mut view = self.lock();
            if view.key == key {
                return view.state.clone();
            }

            Self::cancel_in_flight(&mut view);
            view.key = key.clone();
            view.cycle += 1;

            let Some(key) = key else {
                warn!("Session id or user id missing; not fetching summary");
                self.transition(&mut view, SummaryState::Idle);
                return SummaryState::Idle;
            };

            let token = CancellationToken::new();
            view.cancellation = Some(token.clone());
            self.transition(&mut view, SummaryState::Loading);
            (view.cycle, token, key)
        };

        info!(
            "Starting summary cycle {} for session {} (user {})",
            cycle, key.session_id, key.user_id
        );

        let result = self
            .use_case
            .execute_with_progress(&key.session_id, &token, self.observer.as_ref())
            .await;

        let mut view = self.lock();
        if view.cycle != cycle {
            debug!("Discarding result of superseded summary cycle {}", cycle);
            self.observer.on_cycle_discarded(cycle);
            return view.state.clone();
        }

        view.cancellation = None;
        let next = match result {
            Ok(summary) => SummaryState::Loaded(summary),
            Err(LoadSummaryError::Fetch(error)) => SummaryState::Failed(error),
            Err(LoadSummaryError::Cancelled) => return view.state.clone(),
        };
        self.transition(&mut view, next.clone());
        next
    }

    /// Abandon the in-flight cycle, if any, and return to `Idle`.
    ///
    /// The next [`update`](Self::update) refetches even for the same
    /// identifiers.
    pub fn cancel(&self) {
        let mut view = self.lock();
        if view.cancellation.is_none() {
            return;
        }
        Self::cancel_in_flight(&mut view);
        view.key = None;
        view.cycle += 1;
        self.transition(&mut view, SummaryState::Idle);
    }

    fn cancel_in_flight(view: &mut ViewState) {
        if let Some(token) = view.cancellation.take() {
            debug!("Cancelling summary cycle {}", view.cycle);
            token.cancel();
        }
    }

    fn transition(&self, view: &mut ViewState, state: SummaryState) {
        debug!("Summary state: {} -> {}", view.state, state);
        view.state = state;
        self.observer.on_state_change(&view.state);
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::summary_gateway::GatewayError;
    use crate::use_cases::test_support::{MockGateway, RecordingObserver};
    use summary_domain::{ClarifierAnswer, Conflict, FetchError, SessionSummary};

    fn context(session: Option<&str>, user: Option<&str>) -> SessionContext {
        SessionContext::new(
            session.map(String::from),
            user.map(String::from),
            Some("A travel planner".to_string()),
        )
    }

    fn controller(gateway: &Arc<MockGateway>) -> SummaryController {
        SummaryController::new(LoadSummaryUseCase::new(gateway.clone()))
    }

    fn ok_gateway() -> MockGateway {
        MockGateway::new()
            .with_clarifiers(Ok(vec![ClarifierAnswer::new("Q?", "A!")]))
            .with_conflicts(Ok(vec![
                Conflict::new("I1", vec!["x".into(), "y".into()]).with_resolution("x"),
            ]))
    }

    #[tokio::test]
    async fn test_missing_ids_issue_no_requests() {
        let gateway = Arc::new(ok_gateway());
        let controller = controller(&gateway);

        let state = controller.update(&context(None, None)).await;
        assert_eq!(state, SummaryState::Idle);

        let state = controller.update(&context(Some("s1"), None)).await;
        assert_eq!(state, SummaryState::Idle);

        assert!(gateway.calls().is_empty());
        assert!(controller.state().is_pending());
    }

    #[tokio::test]
    async fn test_update_loads_summary() {
        let gateway = Arc::new(ok_gateway());
        let controller = controller(&gateway);

        let state = controller.update(&context(Some("s1"), Some("u1"))).await;

        assert_eq!(gateway.calls(), vec!["clarifiers:s1", "conflicts:s1"]);
        let summary = state.summary().unwrap();
        assert_eq!(summary.clarifiers[0].prompt(), "Q?");
        assert_eq!(summary.conflicts[0].resolution(), Some("x"));
        assert_eq!(controller.state(), state);
        assert_eq!(controller.cycle(), 1);
    }

    #[tokio::test]
    async fn test_failure_becomes_failed_state() {
        let gateway = Arc::new(MockGateway::new().with_clarifiers(Err(GatewayError::Status {
            status: 401,
            message: Some("Unknown session".to_string()),
        })));
        let controller = controller(&gateway);

        let state = controller.update(&context(Some("s1"), Some("u1"))).await;

        assert_eq!(
            state,
            SummaryState::Failed(FetchError::from_server_message(Some("Unknown session")))
        );
        assert_eq!(gateway.calls(), vec!["clarifiers:s1"]);
    }

    #[tokio::test]
    async fn test_unchanged_key_does_not_refetch() {
        let gateway = Arc::new(ok_gateway());
        let controller = controller(&gateway);

        let first = controller.update(&context(Some("s1"), Some("u1"))).await;
        let mut same_ids = context(Some("s1"), Some("u1"));
        same_ids.user_idea = Some("Edited idea".to_string());
        let second = controller.update(&same_ids).await;

        assert_eq!(first, second);
        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(controller.cycle(), 1);
    }

    #[tokio::test]
    async fn test_user_change_refetches() {
        let gateway = Arc::new(
            ok_gateway()
                .with_clarifiers(Ok(vec![]))
                .with_conflicts(Ok(vec![])),
        );
        let controller = controller(&gateway);

        controller.update(&context(Some("s1"), Some("u1"))).await;
        let state = controller.update(&context(Some("s1"), Some("u2"))).await;

        assert_eq!(gateway.calls().len(), 4);
        assert_eq!(state, SummaryState::Loaded(SessionSummary::default()));
    }

    #[tokio::test]
    async fn test_observer_sees_loading_then_loaded() {
        let gateway = Arc::new(ok_gateway());
        let observer = Arc::new(RecordingObserver::default());
        let controller = controller(&gateway).with_observer(observer.clone());

        controller.update(&context(Some("s1"), Some("u1"))).await;

        assert_eq!(
            observer.events(),
            vec![
                "state:loading",
                "start:clarifiers",
                "done:clarifiers:true",
                "start:conflicts",
                "done:conflicts:true",
                "state:loaded",
            ]
        );
    }

    #[tokio::test]
    async fn test_superseded_cycle_never_overwrites_state() {
        // s1's clarifier request hangs; s2 completes while it is in flight.
        let gateway = Arc::new(
            MockGateway::new()
                .with_clarifiers(Ok(vec![ClarifierAnswer::new("Q2?", "A2")]))
                .with_conflicts(Ok(vec![])),
        );
        let (started, release) = gateway.hold("s1");
        let observer = Arc::new(RecordingObserver::default());
        let controller = Arc::new(controller(&gateway).with_observer(observer.clone()));

        let stale = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.update(&context(Some("s1"), Some("u1"))).await })
        };
        started.notified().await;

        let fresh = controller.update(&context(Some("s2"), Some("u1"))).await;
        release.notify_one();
        let stale_view = stale.await.unwrap();

        assert_eq!(fresh.summary().unwrap().clarifiers[0].prompt(), "Q2?");
        assert_eq!(stale_view, fresh);
        assert_eq!(controller.state(), fresh);
        assert!(observer.events().contains(&"discarded:1".to_string()));
        assert!(!gateway.calls().contains(&"conflicts:s1".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_returns_to_idle_and_allows_refetch() {
        let gateway = Arc::new(
            MockGateway::new()
                .with_clarifiers(Ok(vec![]))
                .with_conflicts(Ok(vec![])),
        );
        let (started, release) = gateway.hold("s1");
        let controller = Arc::new(controller(&gateway));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.update(&context(Some("s1"), Some("u1"))).await })
        };
        started.notified().await;
        controller.cancel();

        assert_eq!(first.await.unwrap(), SummaryState::Idle);
        assert_eq!(controller.state(), SummaryState::Idle);

        // Same ids again: cancel cleared the key, so this is a fresh cycle.
        release.notify_one();
        let state = controller.update(&context(Some("s1"), Some("u1"))).await;
        assert_eq!(state, SummaryState::Loaded(SessionSummary::default()));
    }
}
