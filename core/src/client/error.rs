//! Error taxonomy for API calls

use thiserror::Error;

/// Coarse classification of an [`ApiError`], used by the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    MissingPathParameter,
    InvalidRequest,
    Auth,
    Client,
    RateLimited,
    Server,
    Network,
    UploadInterrupted,
    InvalidResponse,
    Cancelled,
}

impl ErrorKind {
    /// Whether the executor may retry a call that failed with this kind.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::RateLimited
                | ErrorKind::Server
                | ErrorKind::Network
                | ErrorKind::UploadInterrupted
        )
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method}: missing required parameter(s): {}", .names.join(", "))]
    MissingParameter {
        method: &'static str,
        names: Vec<String>,
    },

    #[error("{method}: no value bound for path parameter '{name}'")]
    MissingPathParameter { method: &'static str, name: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("HTTP {status}: {body}")]
    Client { status: u16, body: String },

    #[error("rate limited (HTTP {status}): {body}")]
    RateLimited {
        status: u16,
        body: String,
        retry_after: Option<std::time::Duration>,
    },

    #[error("server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("upload interrupted at byte {offset}: {message}")]
    UploadInterrupted { offset: u64, message: String },

    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    #[error("call cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingParameter { .. } => ErrorKind::MissingParameter,
            ApiError::MissingPathParameter { .. } => ErrorKind::MissingPathParameter,
            ApiError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ApiError::Auth(_) => ErrorKind::Auth,
            ApiError::Client { .. } => ErrorKind::Client,
            ApiError::RateLimited { .. } => ErrorKind::RateLimited,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::UploadInterrupted { .. } => ErrorKind::UploadInterrupted,
            ApiError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            ApiError::Cancelled => ErrorKind::Cancelled,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. }
            | ApiError::RateLimited { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of the failed call, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Client { body, .. }
            | ApiError::RateLimited { body, .. }
            | ApiError::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Server-suggested delay before retrying.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            ApiError::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
