//! Error types for the completion client.
//!
//! [`CompletionError`] is the top-level error; [`ResponseShapeError`] covers
//! malformed response bodies field-by-field.

use thiserror::Error;

/// Top-level error for a completion round trip (connection, status, body).
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("could not reach the completion API: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("completion API returned status {status}")]
    Status { status: u16 },

    #[error("completion API response is not valid JSON: {0}")]
    InvalidJson(#[source] reqwest::Error),

    #[error("malformed completion response: {0}")]
    Shape(#[from] ResponseShapeError),
}

/// A required field of the response body is missing, mistyped, or empty.
///
/// Checks run in order: `choices` → first choice → `message` → `content`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShapeError {
    #[error("`choices` is missing or not an array")]
    MissingChoices,

    #[error("`choices` is empty")]
    EmptyChoices,

    #[error("`choices[0].message` is missing or not an object")]
    MissingMessage,

    #[error("`message.content` is missing or not a string")]
    MissingContent,

    #[error("`message.content` is empty")]
    EmptyContent,
}
