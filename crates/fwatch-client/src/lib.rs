//! Client for the fight-detection analysis service.
//!
//! Drives the client side of the job lifecycle against the service's HTTP
//! surface: upload submission with local validation, fixed-cadence status
//! polling to a terminal outcome, results and report retrieval, and the
//! results-page chat assistant.

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod watcher;

pub use chat::ChatSession;
pub use client::AnalysisClient;
pub use config::{ClientConfig, ALLOWED_EXTENSIONS, DEFAULT_POLL_INTERVAL, MAX_UPLOAD_BYTES};
pub use error::{ClientError, ClientResult};
pub use types::{ResultsDocument, StatusResponse, UploadRequest};
pub use watcher::{JobOutcome, JobWatcher, WatchSupervisor, WatcherHandle};
