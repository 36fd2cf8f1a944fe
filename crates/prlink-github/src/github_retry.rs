//! Failure classification and backoff for GitHub requests.

use std::time::Duration;

use anyhow::anyhow;

const MAX_BACKOFF_MS: u64 = 30_000;
const ERROR_BODY_MAX_CHARS: usize = 800;

/// A request that did not produce a success response.
#[derive(Debug)]
pub enum RequestFailure {
    Status {
        status: u16,
        retry_after: Option<Duration>,
        body: String,
    },
    Transport(reqwest::Error),
}

impl RequestFailure {
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let retry_after = parse_retry_after(response.headers());
        let body = response.text().await.unwrap_or_default();
        Self::Status {
            status,
            retry_after,
            body,
        }
    }

    /// Rate limits, server errors, timeouts and refused connections.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Transport(error) => error.is_timeout() || error.is_connect(),
        }
    }

    pub fn into_error(self, operation: &str) -> anyhow::Error {
        match self {
            Self::Status { status, body, .. } => anyhow!(
                "github api {operation} failed with status {status}: {}",
                clip_chars(&body, ERROR_BODY_MAX_CHARS)
            ),
            Self::Transport(error) => {
                anyhow::Error::new(error).context(format!("github api {operation} request failed"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GithubRetryPolicy {
    pub max_attempts: usize,
    pub base_delay_ms: u64,
}

impl GithubRetryPolicy {
    pub fn new(max_attempts: usize, base_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms: base_delay_ms.max(1),
        }
    }

    /// Delay to wait before another attempt, or `None` when `failure` after
    /// `attempt` tries is final.
    pub fn delay_before_retry(&self, attempt: usize, failure: &RequestFailure) -> Option<Duration> {
        if attempt >= self.max_attempts || !failure.is_retryable() {
            return None;
        }
        let server_hint = match failure {
            RequestFailure::Status { retry_after, .. } => *retry_after,
            RequestFailure::Transport(_) => None,
        };
        Some(self.backoff(attempt, server_hint))
    }

    fn backoff(&self, attempt: usize, server_hint: Option<Duration>) -> Duration {
        let floor = Duration::from_millis(self.base_delay_ms);
        if let Some(hint) = server_hint {
            return hint.max(floor);
        }
        let doublings = attempt.saturating_sub(1).min(10) as u32;
        let backoff_ms = self.base_delay_ms.saturating_mul(1_u64 << doublings);
        Duration::from_millis(backoff_ms.min(MAX_BACKOFF_MS))
    }
}

/// Reads an integer-seconds `Retry-After`; HTTP-date values are ignored.
pub fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn clip_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
