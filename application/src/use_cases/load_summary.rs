//! Load Summary use case.
//!
//! Runs one fetch cycle: clarifier answers, then conflicts, for a single
//! session id. The cycle is all-or-nothing. The first failure ends it and
//! no partial summary is returned.

use crate::ports::summary_gateway::{GatewayError, SummaryGateway};
use crate::ports::summary_observer::{NoObserver, SummaryObserver};
use std::future::Future;
use std::sync::Arc;
use summary_domain::{FetchError, FetchStrategy, SessionSummary, SummaryResource};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Errors that can occur while loading a summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadSummaryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl LoadSummaryError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadSummaryError::Cancelled)
    }
}

/// Use case for loading both summary resources of a session.
///
/// With [`FetchStrategy::Sequential`] (the default) the conflict request is
/// only issued after the clarifier request succeeded. Every request races
/// the cycle's [`CancellationToken`].
#[derive(Clone)]
pub struct LoadSummaryUseCase {
    gateway: Arc<dyn SummaryGateway>,
    strategy: FetchStrategy,
}

impl LoadSummaryUseCase {
    pub fn new(gateway: Arc<dyn SummaryGateway>) -> Self {
        Self {
            gateway,
            strategy: FetchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Load the summary without progress callbacks.
    pub async fn execute(
        &self,
        session_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<SessionSummary, LoadSummaryError> {
        self.execute_with_progress(session_id, cancellation, &NoObserver)
            .await
    }

    /// Load the summary, reporting each request to `observer`.
    pub async fn execute_with_progress(
        &self,
        session_id: &str,
        cancellation: &CancellationToken,
        observer: &dyn SummaryObserver,
    ) -> Result<SessionSummary, LoadSummaryError> {
        info!(
            "Loading summary for session {} ({})",
            session_id, self.strategy
        );

        let summary = match self.strategy {
            FetchStrategy::Sequential => {
                let clarifiers = guarded(
                    SummaryResource::Clarifiers,
                    cancellation,
                    observer,
                    self.gateway.clarifier_answers(session_id),
                )
                .await?;
                let conflicts = guarded(
                    SummaryResource::Conflicts,
                    cancellation,
                    observer,
                    self.gateway.conflicts(session_id),
                )
                .await?;
                SessionSummary::new(clarifiers, conflicts)
            }
            FetchStrategy::Concurrent => {
                let (clarifiers, conflicts) = tokio::try_join!(
                    guarded(
                        SummaryResource::Clarifiers,
                        cancellation,
                        observer,
                        self.gateway.clarifier_answers(session_id),
                    ),
                    guarded(
                        SummaryResource::Conflicts,
                        cancellation,
                        observer,
                        self.gateway.conflicts(session_id),
                    ),
                )?;
                SessionSummary::new(clarifiers, conflicts)
            }
        };

        info!(
            "Loaded summary for session {}: {} clarifier answers, {} conflicts",
            session_id,
            summary.clarifiers.len(),
            summary.conflicts.len()
        );

        Ok(summary)
    }
}

/// Run one request against the cancellation token.
///
/// Every reported start is paired with exactly one completion; a request
/// whose token was cancelled before it began reports neither.
async fn guarded<T>(
    resource: SummaryResource,
    cancellation: &CancellationToken,
    observer: &dyn SummaryObserver,
    request: impl Future<Output = Result<T, GatewayError>>,
) -> Result<T, LoadSummaryError> {
    if cancellation.is_cancelled() {
        debug!("Skipping request for {}: cycle already cancelled", resource);
        return Err(LoadSummaryError::Cancelled);
    }

    observer.on_fetch_start(resource);

    let result = tokio::select! {
        biased;
        _ = cancellation.cancelled() => {
            debug!("Request for {} cancelled", resource);
            observer.on_fetch_complete(resource, false);
            return Err(LoadSummaryError::Cancelled);
        }
        result = request => result,
    };

    observer.on_fetch_complete(resource, result.is_ok());

    result.map_err(|e| {
        error!("Failed to fetch {}: {}", resource, e);
        LoadSummaryError::Fetch(e.to_fetch_error())
    })
}
