// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaseedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

pub type RaseedResult<T> = Result<T, RaseedError>;

impl RaseedError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        RaseedError::Config(msg.into())
    }

    pub fn api_error(msg: impl Into<String>) -> Self {
        RaseedError::Api(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        RaseedError::Logging(msg.into())
    }

    pub fn translation_error(msg: impl Into<String>) -> Self {
        RaseedError::Translation(msg.into())
    }
}
