//! Error types for the data-access layer.
//!
//! Server-reported errors and bad HTTP statuses are data (see
//! [`crate::response::ServerResponse`]); only failures that prevent a
//! round-trip entirely surface through these types.

use thiserror::Error;

/// Result alias used throughout the client.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation before anything was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The HTTP transport could not complete the round-trip.
    #[error("transport error: {0}")]
    Transport(String),

    /// Client configuration is unusable.
    #[error("config error: {0}")]
    Config(String),
}
