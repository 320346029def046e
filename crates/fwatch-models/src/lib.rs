//! Shared data models for the FightWatch client.
//!
//! This crate provides Serde-serializable types for:
//! - Job identity and lifecycle status
//! - Incident segments and full analysis results
//! - Chat transcripts
//! - Watch progress events

pub mod analysis;
pub mod chat;
pub mod job;
pub mod segment;
pub mod watch;

// Re-export common types
pub use analysis::AnalysisResults;
pub use chat::{ChatMessage, ChatTranscript, Sender};
pub use job::{JobId, JobStatus};
pub use segment::{format_timestamp, Segment};
pub use watch::WatchEvent;
