//! Error handling for the resume optimizer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeOptimizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis service error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeOptimizerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeOptimizerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeOptimizerError::Api(err.to_string())
    }
}

/// Convert reqwest transport errors to our custom error type
impl From<reqwest::Error> for ResumeOptimizerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeOptimizerError::Network(err.to_string())
    }
}
