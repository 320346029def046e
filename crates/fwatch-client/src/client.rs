//! Analysis service HTTP client.

use std::path::Path;

use reqwest::multipart;
use reqwest::Client;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use fwatch_models::JobId;

use crate::config::{ClientConfig, ALLOWED_EXTENSIONS};
use crate::error::{ClientError, ClientResult};
use crate::types::{
    ChatRequest, ChatResponse, ErrorResponse, ReportResponse, ResultsDocument, StatusResponse,
    UploadRequest, UploadResponse,
};

/// Client for the fight-detection analysis service.
pub struct AnalysisClient {
    http: Client,
    config: ClientConfig,
}

impl AnalysisClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Navigation target for a completed job's results page.
    pub fn results_url(&self, job_id: &JobId) -> String {
        format!("{}/results/{}", self.config.base_url, job_id)
    }

    /// Validate and submit a video for analysis.
    ///
    /// Validation is strictly local: a missing file, a disallowed extension,
    /// or a file over the size limit fails before any request is issued. On
    /// acceptance the file is streamed as the `video` field of a multipart
    /// form together with the tuning parameters.
    pub async fn upload(&self, request: &UploadRequest) -> ClientResult<JobId> {
        self.validate_upload(&request.video_path).await?;

        let url = format!("{}/upload", self.config.base_url);
        debug!("Uploading {} to {}", request.video_path.display(), url);

        let file_name = request
            .video_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        let file = tokio::fs::File::open(&request.video_path).await?;
        let part = multipart::Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(file)))
            .file_name(file_name);

        let form = multipart::Form::new()
            .part("video", part)
            .text("sequence_length", request.sequence_length.to_string())
            .text("threshold", request.threshold.to_string())
            .text("output_frame_rate", request.output_frame_rate.to_string());

        let response = self.http.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("Upload failed with status {}", status),
            };
            return Err(ClientError::Rejected(message));
        }

        // A 2xx body can still carry an error field instead of a job ID.
        let body: serde_json::Value = response.json().await?;
        if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
            return Err(ClientError::rejected(error));
        }

        let upload: UploadResponse = serde_json::from_value(body)?;
        info!(job_id = %upload.job_id, "Upload accepted");
        Ok(upload.job_id)
    }

    /// Fetch the current status of a job. One check; the watcher drives
    /// repetition.
    pub async fn status(&self, job_id: &JobId) -> ClientResult<StatusResponse> {
        let url = format!("{}/status/{}", self.config.base_url, job_id);

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let status: StatusResponse = response.json().await?;

        debug!(job_id = %job_id, status = %status.status, "Status check");
        Ok(status)
    }

    /// Fetch the full results document for a completed job.
    pub async fn results(&self, job_id: &JobId) -> ClientResult<ResultsDocument> {
        let url = format!("{}/api/results/{}", self.config.base_url, job_id);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("Results fetch failed with status {}", status),
            };
            return Err(ClientError::Rejected(message));
        }

        Ok(response.json().await?)
    }

    /// Ask the server to regenerate the security report for a completed job.
    pub async fn regenerate_report(&self, job_id: &JobId) -> ClientResult<String> {
        let url = format!("{}/api/regenerate-report/{}", self.config.base_url, job_id);

        let response = self.http.post(&url).send().await?;
        let outcome: ReportResponse = response.json().await?;

        match outcome {
            ReportResponse::Success { report } => {
                info!(job_id = %job_id, "Report regenerated");
                Ok(report)
            }
            ReportResponse::Error { error } => Err(ClientError::Rejected(error)),
        }
    }

    /// Send one chat message about a completed job and return the reply.
    pub async fn chat(&self, job_id: &JobId, message: &str) -> ClientResult<String> {
        if message.trim().is_empty() {
            return Err(ClientError::validation("No message provided"));
        }

        let url = format!("{}/api/chat/{}", self.config.base_url, job_id);
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let outcome: ChatResponse = response.json().await?;

        match outcome {
            ChatResponse::Success { response } => Ok(response),
            ChatResponse::Error { error } => Err(ClientError::Rejected(error)),
        }
    }

    /// Pre-network upload checks: extension, existence, size limit.
    async fn validate_upload(&self, path: &Path) -> ClientResult<()> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => return Err(ClientError::validation("Invalid file type")),
        }

        let metadata = tokio::fs::metadata(path).await.map_err(|_| {
            ClientError::validation(format!("File not found: {}", path.display()))
        })?;

        if metadata.len() > self.config.max_upload_bytes {
            return Err(ClientError::validation(format!(
                "File too large: {} bytes (maximum is {} bytes)",
                metadata.len(),
                self.config.max_upload_bytes
            )));
        }

        Ok(())
    }
}
