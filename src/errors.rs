use reqwest::StatusCode;
use thiserror::Error;

use crate::retry::Retryable;

pub type ExofopResult<T> = Result<T, ExofopError>;

/// Everything that can go wrong while talking to ExoFOP.
///
/// The set is closed on purpose: transport, HTTP status, decode, validation,
/// and upstream-reported rejections cover every failure the service surface
/// can produce. Anything outside this set is a defect and should panic rather
/// than be swallowed.
#[derive(Debug, Error)]
pub enum ExofopError {
    #[error("network request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("invalid target data: {message}")]
    Validation { message: String },

    #[error("service rejected request: {message}")]
    Upstream { message: String },
}

impl ExofopError {
    pub fn http_status(status: StatusCode, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

impl Retryable for ExofopError {
    /// Transport failures and throttling/server-side statuses are worth
    /// another attempt; decode, validation, and upstream rejections are
    /// permanent and retrying them only burns the deadline.
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => {
                status.is_server_error()
                    || *status == StatusCode::REQUEST_TIMEOUT
                    || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Decode { .. } | Self::Validation { .. } | Self::Upstream { .. } => false,
        }
    }
}
