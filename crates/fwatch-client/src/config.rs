//! Client configuration.

use std::time::Duration;

/// Maximum accepted upload size (300 MB), checked before any network call.
pub const MAX_UPLOAD_BYTES: u64 = 300 * 1024 * 1024;

/// Fixed delay between status checks; the first check waits this long too.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Upload extensions the server accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

/// Configuration for the analysis service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Delay between status checks
    pub poll_interval: Duration,
    /// Maximum upload size in bytes
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(60),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FWATCH_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("FWATCH_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
