//! Shared error types for the quote calculator

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown paver model: {id}")]
    UnknownModel { id: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl SharedError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: &str) -> Self {
        SharedError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
