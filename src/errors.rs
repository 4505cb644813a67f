//! Error types for curl2retrofit

use thiserror::Error;

use crate::curl::ValidationError;

/// Main error type for curl2retrofit
#[derive(Error, Debug)]
pub enum Curl2RetrofitError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    InterfaceFile(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, Curl2RetrofitError>;
