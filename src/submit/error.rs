//! Error types for submitting content to the summarization service.

use thiserror::Error;

/// Errors that can occur during a submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Neither a file nor pasted text is available.
    #[error("No input: upload a file or paste some text")]
    NoInput,

    /// A submission is already waiting on the service.
    #[error("A submission is already in progress")]
    InFlight,

    /// Failed to build the HTTP client or reach the service.
    #[error("Connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not valid JSON of the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The response JSON had no `summary` string.
    #[error("Response did not contain a summary")]
    MissingSummary,
}
