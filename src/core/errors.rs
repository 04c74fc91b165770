//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Provider throttled the request. The message is the provider's own text.
    #[error("{message}")]
    RateLimited {
        /// Provider response body
        message: String,
    },

    /// Provider quota used up. The message is the provider's own text.
    #[error("{message}")]
    QuotaExceeded {
        /// Provider response body
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error description
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was missing or malformed
        message: String,
    },

    /// Language code the provider does not know, e.g. `invalid source language`
    #[error("{message}")]
    UnsupportedLanguage {
        /// Which side was rejected
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Offending setting
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Page template failed to render
    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    /// Layered configuration could not be read
    #[error("Configuration error: {0}")]
    ConfigSourceError(#[from] config::ConfigError),
}

impl TranslationError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        TranslationError::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
