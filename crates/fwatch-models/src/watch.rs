//! Watch progress events.
//!
//! One event is emitted per status check so a UI layer can mirror the job's
//! lifecycle without talking to the poller directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Event emitted by the job watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Job is still processing
    Processing {
        /// Elapsed seconds reported by the server, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        processing_time: Option<f64>,
    },

    /// Job finished; the caller should navigate to the results page
    Completed {
        /// Navigation target for the results view
        results_url: String,
    },

    /// Job failed server-side
    Failed {
        /// Server-provided failure message
        message: String,
    },
}

impl WatchEvent {
    /// Create a processing event.
    pub fn processing(processing_time: Option<f64>) -> Self {
        WatchEvent::Processing { processing_time }
    }

    /// Create a completed event.
    pub fn completed(results_url: impl Into<String>) -> Self {
        WatchEvent::Completed {
            results_url: results_url.into(),
        }
    }

    /// Create a failed event.
    pub fn failed(message: impl Into<String>) -> Self {
        WatchEvent::Failed {
            message: message.into(),
        }
    }

    /// Check if this event ends the watch.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WatchEvent::Processing { .. })
    }
}
