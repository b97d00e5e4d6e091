//! Quoter error types

use shared::SharedError;
use thiserror::Error;

/// Result type for quoter operations
pub type QuoterResult<T> = Result<T, QuoterError>;

#[derive(Error, Debug)]
pub enum QuoterError {
    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error("Persistence failed for key '{key}': {message}")]
    Persistence { key: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No quote with id {id} in history")]
    QuoteNotFound { id: String },

    #[error("No quote is currently displayed")]
    NoQuoteDisplayed,

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl QuoterError {
    pub fn persistence(key: &str, message: impl ToString) -> Self {
        QuoterError::Persistence {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        QuoterError::Config {
            message: message.into(),
        }
    }

    /// True when the error came from rejected user input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, QuoterError::Shared(SharedError::InvalidInput { .. }))
    }
}

/// Tip collaborator failures. Always recovered by a fallback string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TipFetchError {
    #[error("No API key configured for the tip service")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Tip service returned HTTP {status}")]
    Http { status: u16 },

    #[error("Tip service response could not be parsed: {0}")]
    InvalidResponse(String),

    #[error("Tip service returned no text")]
    EmptyResponse,

    #[error("Tip request timed out after {millis} ms")]
    Timeout { millis: u64 },
}
