//! Errors raised outside the analysis pipeline: loading, validating, and
//! saving configuration. Attempt failures never surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Environment or setup problem (no home directory, bad proxy URL)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `AppConfig`
    #[error("Malformed config file: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config parsed but holds a value the pipeline cannot run with
    #[error("Invalid setting: {0}")]
    Validation(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
