//! Database structure models.
//!
//! Contains the request and payload shapes for the structure-fetch endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for fetching the structure of a connected database.
///
/// Field names are camelCase on the wire; the server matches them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStructureRequest {
    /// Identifier of the pre-configured connection.
    #[validate(length(min = 1, message = "Connection identifier is required"))]
    pub connection_url: String,
}

impl DatabaseStructureRequest {
    /// Creates a request for the given connection identifier.
    pub fn new(connection_url: impl Into<String>) -> Self {
        Self {
            connection_url: connection_url.into(),
        }
    }
}

/// Payload of a successful structure fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseStructure {
    /// Table names visible through the connection.
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let req = DatabaseStructureRequest::new("connectionUrl");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "connectionUrl": "connectionUrl" })
        );
    }

    #[test]
    fn test_empty_identifier_fails_validation() {
        assert!(DatabaseStructureRequest::new("").validate().is_err());
        assert!(DatabaseStructureRequest::new("postgres://db").validate().is_ok());
    }
}
