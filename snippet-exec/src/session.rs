use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::{
    service::ExecutionService,
    types::{ExecutionRequest, ExecutionResult},
};

const EVENT_CAPACITY: usize = 64;

/// Notification published to session observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session went from idle to executing
    Executing,
    /// The latest run settled. `None` when the call failed or was abandoned.
    Settled(Option<ExecutionResult>),
    /// The session was reset to its default source
    Reset,
}

/// What a single `run()` call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The service returned a result and it became the session's result
    Completed(ExecutionResult),
    /// The call failed; the session's result was cleared
    Failed,
    /// A newer run or a reset happened while the call was pending, so its
    /// settlement was discarded
    Superseded,
}

/// Point-in-time view of a session, for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub source_code: String,
    pub language_id: u32,
    pub is_executing: bool,
    pub last_result: Option<ExecutionResult>,
}

#[derive(Debug)]
struct SessionState {
    source_code: String,
    language_id: u32,
    is_executing: bool,
    last_result: Option<ExecutionResult>,
    /// Bumped by every `run()` and `reset()`. A settlement only applies if
    /// the generation it was issued under is still current.
    generation: u64,
}

/// One editing session: the editable snippet, its run state and the latest
/// result.
///
/// Overlapping runs are allowed; the most recently issued one wins and any
/// earlier one that settles later is dropped. `reset()` cannot cancel the
/// HTTP call already under way, but it does invalidate it the same way.
///
/// The state lock is never held across an await, so it is a plain
/// synchronous mutex and can be taken from `Drop`.
pub struct SnippetSession {
    service: Arc<dyn ExecutionService>,
    default_source: String,
    state: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

/// Settles a run as failed if its future is dropped before the call returns
/// (timeout, `select!`, aborted task, panicking service).
struct InFlight<'a> {
    session: &'a SnippetSession,
    generation: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.session.lock_state();
        if state.generation != self.generation {
            return;
        }
        error!(
            generation = self.generation,
            "Snippet execution abandoned before it settled"
        );
        state.is_executing = false;
        state.last_result = None;
        self.session.publish(SessionEvent::Settled(None));
    }
}

impl SnippetSession {
    pub fn new(
        service: Arc<dyn ExecutionService>,
        default_source: impl Into<String>,
        language_id: u32,
    ) -> Self {
        let default_source = default_source.into();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            service,
            state: Mutex::new(SessionState {
                source_code: default_source.clone(),
                language_id,
                is_executing: false,
                last_result: None,
                generation: 0,
            }),
            default_source,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn source_code(&self) -> String {
        self.lock_state().source_code.clone()
    }

    pub fn set_source_code(&self, source_code: impl Into<String>) {
        self.lock_state().source_code = source_code.into();
    }

    pub fn language_id(&self) -> u32 {
        self.lock_state().language_id
    }

    pub fn set_language_id(&self, language_id: u32) {
        self.lock_state().language_id = language_id;
    }

    pub fn is_executing(&self) -> bool {
        self.lock_state().is_executing
    }

    pub fn last_result(&self) -> Option<ExecutionResult> {
        self.lock_state().last_result.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            source_code: state.source_code.clone(),
            language_id: state.language_id,
            is_executing: state.is_executing,
            last_result: state.last_result.clone(),
        }
    }

    /// Submit the current source and wait for the outcome.
    ///
    /// Transport failures never escape: they are logged and leave the
    /// session without a result. Dropping the returned future before it
    /// completes is treated the same way.
    pub async fn run(&self) -> RunOutcome {
        let (generation, request) = {
            let mut state = self.lock_state();
            state.generation += 1;
            if !state.is_executing {
                state.is_executing = true;
                self.publish(SessionEvent::Executing);
            }
            let request = ExecutionRequest {
                language_id: state.language_id,
                source_code: state.source_code.clone(),
            };
            (state.generation, request)
        };
        let mut in_flight = InFlight {
            session: self,
            generation,
            settled: false,
        };

        debug!(generation, language_id = request.language_id, "Running snippet");
        let result = self.service.execute(&request).await;
        in_flight.settled = true;

        let mut state = self.lock_state();
        if state.generation != generation {
            debug!(
                generation,
                current = state.generation,
                "Discarding stale execution result"
            );
            return RunOutcome::Superseded;
        }

        state.is_executing = false;
        match result {
            Ok(result) => {
                info!(generation, status = %result.status, "Snippet execution completed");
                state.last_result = Some(result.clone());
                self.publish(SessionEvent::Settled(Some(result.clone())));
                RunOutcome::Completed(result)
            }
            Err(e) => {
                error!("Snippet execution failed: {}", e);
                state.last_result = None;
                self.publish(SessionEvent::Settled(None));
                RunOutcome::Failed
            }
        }
    }

    /// Restore the default source and drop any result, pending or not.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        state.generation += 1;
        state.is_executing = false;
        state.last_result = None;
        state.source_code = self.default_source.clone();
        self.publish(SessionEvent::Reset);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        // Every critical section leaves the state consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
