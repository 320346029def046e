//! Chat session over the analysis assistant endpoint.

use std::sync::Arc;

use fwatch_models::{ChatMessage, ChatTranscript, JobId};

use crate::client::AnalysisClient;
use crate::error::{ClientError, ClientResult};

/// One results-page chat conversation about a completed job.
///
/// The transcript is append-only and lives only as long as the session.
pub struct ChatSession {
    client: Arc<AnalysisClient>,
    job_id: JobId,
    transcript: ChatTranscript,
}

impl ChatSession {
    pub fn new(client: Arc<AnalysisClient>, job_id: JobId) -> Self {
        Self {
            client,
            job_id,
            transcript: ChatTranscript::new(),
        }
    }

    /// Send a user message and wait for the assistant's reply.
    ///
    /// The user message is recorded before the request goes out; on failure
    /// the transcript keeps it with no bot entry, and the send can simply be
    /// retried.
    pub async fn send(&mut self, message: impl Into<String>) -> ClientResult<String> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ClientError::validation("No message provided"));
        }

        self.transcript.push(ChatMessage::user(message.clone()));

        let reply = self.client.chat(&self.job_id, &message).await?;
        self.transcript.push(ChatMessage::bot(reply.clone()));
        Ok(reply)
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }
}
