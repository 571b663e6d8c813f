//! Table contents models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for fetching the contents of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TableContentsRequest {
    /// Identifier of the pre-configured connection.
    #[validate(length(min = 1, message = "Connection identifier is required"))]
    pub connection_url: String,

    /// Name of the table to read.
    #[validate(length(min = 1, message = "Table name is required"))]
    pub table: String,
}

impl TableContentsRequest {
    /// Creates a request for the given connection identifier and table.
    pub fn new(connection_url: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            connection_url: connection_url.into(),
            table: table.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let req = TableContentsRequest::new("connectionUrl", "users");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "connectionUrl": "connectionUrl", "table": "users" })
        );
    }

    #[test]
    fn test_empty_table_name_fails_validation() {
        assert!(TableContentsRequest::new("connectionUrl", "").validate().is_err());
    }
}
