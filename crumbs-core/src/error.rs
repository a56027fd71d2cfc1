//! Error types for crumbs-core

use thiserror::Error;

/// Main error type for the crumbs-core library
#[derive(Error, Debug)]
pub enum Error {
    /// A pipeline stage received nothing to work with
    #[error("empty input to {stage}")]
    EmptyInput { stage: &'static str },

    /// Time zone could not be resolved
    #[error("time zone projection error: {0}")]
    Projection(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Activity feed error
    #[error("feed error: {0}")]
    Feed(String),
}

/// Result type alias for crumbs-core
pub type Result<T> = std::result::Result<T, Error>;
