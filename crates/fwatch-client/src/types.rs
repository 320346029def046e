//! Analysis service request/response types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fwatch_models::{AnalysisResults, JobId, JobStatus};

/// Parameters for a video upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Path to the video file
    pub video_path: PathBuf,
    /// Frames per detection chunk
    pub sequence_length: u32,
    /// Detection probability threshold
    pub threshold: f64,
    /// Frame rate of the annotated output video
    pub output_frame_rate: u32,
}

impl UploadRequest {
    /// Create a request with the server's default tuning parameters.
    pub fn new(video_path: impl Into<PathBuf>) -> Self {
        Self {
            video_path: video_path.into(),
            sequence_length: 40,
            threshold: 0.8,
            output_frame_rate: 30,
        }
    }

    /// Set the frames-per-chunk window.
    pub fn with_sequence_length(mut self, sequence_length: u32) -> Self {
        self.sequence_length = sequence_length;
        self
    }

    /// Set the detection threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the output frame rate.
    pub fn with_output_frame_rate(mut self, output_frame_rate: u32) -> Self {
        self.output_frame_rate = output_frame_rate;
        self
    }

    pub fn video_path(&self) -> &Path {
        &self.video_path
    }
}

/// Body of a successful upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub job_id: JobId,
}

/// Body returned by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error body the server attaches to rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Tagged outcome of the report-regeneration endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportResponse {
    Success { report: String },
    Error { error: String },
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Tagged outcome of the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatResponse {
    Success { response: String },
    Error { error: String },
}

/// Body of the full-results endpoint for a completed job.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsDocument {
    /// Always `completed`; other statuses come back as error bodies
    pub status: JobStatus,
    /// The analysis results
    pub results: AnalysisResults,
    /// Generated security report (HTML)
    pub report: String,
}
