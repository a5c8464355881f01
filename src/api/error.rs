//! Error types for the quiz API integration

use thiserror::Error;

/// Errors that can occur when talking to the quiz backend or Wikipedia
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Backend rejected the request with a structured detail message
    #[error("{detail}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Detail message from the backend, verbatim
        detail: String,
    },

    /// Non-success response without a usable detail body
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown to the user when this error is surfaced.
    ///
    /// Backend details pass through unmodified; everything else uses the
    /// error's display message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed response, if one arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } | ApiError::Status { status } => Some(*status),
            ApiError::RequestError(e) => e.status().map(|s| s.as_u16()),
            ApiError::JsonError(_) => None,
        }
    }
}
