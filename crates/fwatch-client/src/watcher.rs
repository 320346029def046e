//! Job lifecycle watcher.
//!
//! Polls the status endpoint at a fixed cadence until the job reaches a
//! terminal state, then reports the outcome exactly once. Between checks the
//! watcher is suspended in a timer; no other work is pending.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use fwatch_models::{JobId, JobStatus, WatchEvent};

use crate::client::AnalysisClient;
use crate::error::{ClientError, ClientResult};

/// Fallback when the server reports failure without a message.
const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";

/// Terminal outcome of a watched job.
///
/// A job the server finished with an error is not a `ClientError`: transport
/// worked, the analysis didn't.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// The job completed; navigate to the results page.
    Completed {
        /// Elapsed processing time reported by the server, if any
        processing_time: Option<f64>,
    },
    /// The server reports the job itself failed.
    Failed {
        /// Server-provided failure message
        message: String,
    },
}

impl JobOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed { .. })
    }
}

/// Polls one job until it reaches a terminal state.
pub struct JobWatcher {
    client: Arc<AnalysisClient>,
    job_id: JobId,
    events: Option<mpsc::UnboundedSender<WatchEvent>>,
}

impl JobWatcher {
    pub fn new(client: Arc<AnalysisClient>, job_id: JobId) -> Self {
        Self {
            client,
            job_id,
            events: None,
        }
    }

    /// Attach an event sender; the watcher emits one event per status check.
    pub fn with_events(mut self, sender: mpsc::UnboundedSender<WatchEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Poll until the job is terminal.
    ///
    /// Consumes the watcher: a given job is polled to completion at most
    /// once. The first check is delayed by one full interval, and every
    /// later check by the same interval. A transport failure (network error,
    /// unparseable body) ends the watch immediately with `Err`; the caller
    /// restores its submission controls and may start over.
    pub async fn watch(self) -> ClientResult<JobOutcome> {
        let interval = self.client.config().poll_interval;

        loop {
            tokio::time::sleep(interval).await;

            let status = match self.client.status(&self.job_id).await {
                Ok(status) => status,
                Err(e) => {
                    warn!(job_id = %self.job_id, "Status check failed: {}", e);
                    return Err(e);
                }
            };

            match status.status {
                JobStatus::Completed => {
                    info!(job_id = %self.job_id, "Job completed");
                    self.emit(WatchEvent::completed(
                        self.client.results_url(&self.job_id),
                    ));
                    return Ok(JobOutcome::Completed {
                        processing_time: status.processing_time,
                    });
                }
                JobStatus::Failed => {
                    let message = status
                        .error
                        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                    warn!(job_id = %self.job_id, "Job failed: {}", message);
                    self.emit(WatchEvent::failed(message.clone()));
                    return Ok(JobOutcome::Failed { message });
                }
                JobStatus::Processing => {
                    debug!(job_id = %self.job_id, "Job still processing");
                    self.emit(WatchEvent::processing(status.processing_time));
                }
            }
        }
    }

    /// Run the watch on a background task.
    pub fn spawn(self) -> WatcherHandle {
        let job_id = self.job_id.clone();
        let handle = tokio::spawn(self.watch());
        WatcherHandle { job_id, handle }
    }

    fn emit(&self, event: WatchEvent) {
        if let Some(sender) = &self.events {
            // A dropped receiver only means nobody is rendering progress.
            let _ = sender.send(event);
        }
    }
}

/// Handle to a spawned watch task.
pub struct WatcherHandle {
    job_id: JobId,
    handle: JoinHandle<ClientResult<JobOutcome>>,
}

impl WatcherHandle {
    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Stop polling. Safe to call at page teardown; the pending timer is
    /// dropped with the task.
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the terminal outcome. Returns `None` if the watch was
    /// stopped before reaching one.
    pub async fn join(self) -> Option<ClientResult<JobOutcome>> {
        match self.handle.await {
            Ok(outcome) => Some(outcome),
            Err(join_err) if join_err.is_cancelled() => None,
            Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
        }
    }
}

/// Guards the one-watch-per-page invariant.
///
/// The status region of the page must only ever be driven by the job it was
/// submitted for; starting a second watch while one is live is refused.
#[derive(Default)]
pub struct WatchSupervisor {
    active: Option<WatcherHandle>,
}

impl WatchSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a job. Refused while a previous watch is still
    /// running; callers that want to switch jobs call `stop` first.
    pub fn start(&mut self, watcher: JobWatcher) -> ClientResult<&WatcherHandle> {
        if let Some(active) = &self.active {
            if !active.is_finished() {
                return Err(ClientError::WatchInProgress);
            }
        }
        Ok(self.active.insert(watcher.spawn()))
    }

    /// Stop any live watch (page teardown).
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.stop();
        }
    }

    /// Take the active handle, e.g. to await its outcome.
    pub fn take(&mut self) -> Option<WatcherHandle> {
        self.active.take()
    }

    pub fn is_watching(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }
}
