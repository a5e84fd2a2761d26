use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Backend error taxonomy. Each code carries a canned user-facing message
/// used when the server response did not include one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NetworkError,
    Timeout,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    ServiceUnavailable,
    UnknownError,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::BadRequest,
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            408 => ErrorCode::Timeout,
            429 => ErrorCode::RateLimited,
            500 => ErrorCode::ServerError,
            503 => ErrorCode::ServiceUnavailable,
            _ => ErrorCode::UnknownError,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// The fallback message shown when the backend supplied none.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "Network error. Please check your connection.",
            ErrorCode::Timeout => "Request timed out. Please try again.",
            ErrorCode::BadRequest => "Invalid request",
            ErrorCode::Unauthorized => "Authentication required. Please sign in again.",
            ErrorCode::Forbidden => "You do not have permission to perform this action.",
            ErrorCode::NotFound => "The requested resource was not found.",
            ErrorCode::RateLimited => "Too many requests. Please try again later.",
            ErrorCode::ServerError => "Server error. Please try again later.",
            ErrorCode::ServiceUnavailable => {
                "Service temporarily unavailable. Please try again later."
            }
            ErrorCode::UnknownError => "An unexpected error occurred",
        }
    }
}

/// Error type for all backend operations. Coordinators catch these and
/// surface them as per-operation message strings; `retry_with_backoff`
/// re-throws them after exhausting retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, no response received.
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),

    /// The configured request timeout elapsed.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// The backend answered with a non-success status.
    /// `message` is the body's `error`/`message` field when present.
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or(.code.default_message()))]
    Api {
        status: u16,
        code: ErrorCode,
        message: Option<String>,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to obtain auth token: {0}")]
    Token(#[source] anyhow::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(e)
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Network(_) => ErrorCode::NetworkError,
            ApiError::Timeout => ErrorCode::Timeout,
            ApiError::Api { code, .. } => *code,
            ApiError::Decode(_) | ApiError::Token(_) => ErrorCode::UnknownError,
        }
    }

    /// Whether the error class is eligible for exponential-backoff retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Api { status, .. } => {
                matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Whether the error should be surfaced to the user (e.g. as a toast).
    /// 401 is excluded: the external auth redirect flow owns that path.
    pub fn should_surface(&self) -> bool {
        self.status() != Some(401)
    }

    /// The user-facing message for coordinator state: the server-provided
    /// message when present, a fixed transport message otherwise, or the
    /// caller's per-operation fallback.
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Api { message: None, .. } => fallback.to_string(),
            ApiError::Network(_) => "Network error occurred".to_string(),
            ApiError::Timeout => "Request timed out. Please try again.".to_string(),
            ApiError::Decode(_) | ApiError::Token(_) => fallback.to_string(),
        }
    }
}

/// Retries `operation` with exponential backoff (delay = base * 2^attempt)
/// up to `max_retries` additional attempts. Non-retryable errors fail
/// immediately; the last classified error is re-thrown once retries are
/// exhausted.
pub async fn retry_with_backoff<T, F, Fut>(
    mut operation: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if !e.is_retryable() || attempt >= max_retries {
                    return Err(e);
                }
                let delay = base_delay * 2u32.pow(attempt);
                warn!(
                    "attempt {} failed ({}), retrying after {}ms",
                    attempt + 1,
                    e.code().as_str(),
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
