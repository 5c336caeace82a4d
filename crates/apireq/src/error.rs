//! Error types for apireq crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApireqError {
    #[error("Validation error: {0}")]
    Validation(#[from] apireq_core::ValidationError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApireqError>;
