//! Server response envelope types.
//!
//! Every extension endpoint answers with the same tagged envelope; the
//! `responseType` tag decides which payload is meaningful.

use serde::{Deserialize, Serialize};

/// Tagged response envelope returned by every server endpoint.
///
/// On the wire: `{"responseType": "success" | "error", "responseData": {...}}`.
///
/// Failures the server never answered for (non-2xx HTTP status, body that is
/// not a valid envelope) are synthesized locally into the `Error` variant, so
/// callers always handle exactly two cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "responseType", content = "responseData", rename_all = "lowercase")]
pub enum ServerResponse<T> {
    /// The operation succeeded; payload shape depends on the endpoint.
    Success(T),
    /// The server (or, locally, the transport layer) reported an error.
    Error(ErrorMessage),
}

/// Error payload carried by the `error` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable error message.
    pub message: String,
}

impl<T> ServerResponse<T> {
    /// Invokes exactly one handler, chosen by the envelope tag, with the
    /// corresponding payload.
    ///
    /// Payloads are passed by reference so a stored result can be matched
    /// repeatedly.
    pub fn match_with<R>(
        &self,
        on_success: impl FnOnce(&T) -> R,
        on_error: impl FnOnce(&ErrorMessage) -> R,
    ) -> R {
        match self {
            ServerResponse::Success(data) => on_success(data),
            ServerResponse::Error(err) => on_error(err),
        }
    }

    /// Returns true for the `success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, ServerResponse::Success(_))
    }

    /// Builds the local error envelope for a failing HTTP status.
    pub fn from_status(status: u16) -> Self {
        ServerResponse::Error(ErrorMessage {
            message: format!("Unexpected response status: {}", status),
        })
    }

    /// Builds the local error envelope for a body that is not a valid
    /// envelope.
    pub fn from_decode_error(detail: impl std::fmt::Display) -> Self {
        ServerResponse::Error(ErrorMessage {
            message: format!("Invalid response body: {}", detail),
        })
    }
}
