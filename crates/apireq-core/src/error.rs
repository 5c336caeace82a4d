//! Error types for apireq-core

use thiserror::Error;

/// Rejection produced by `ApiRequestBuilder::finalize`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("HTTPS required for url: {url}")]
    HttpsRequired { url: String },

    #[error("Timeout too high: {timeout} > {max_timeout}")]
    TimeoutTooHigh { timeout: u64, max_timeout: u64 },
}

impl ValidationError {
    /// Check if the url was rejected for not using HTTPS
    pub fn is_https_required(&self) -> bool {
        matches!(self, ValidationError::HttpsRequired { .. })
    }

    /// Check if the timeout exceeded the allowed maximum
    pub fn is_timeout_too_high(&self) -> bool {
        matches!(self, ValidationError::TimeoutTooHigh { .. })
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
