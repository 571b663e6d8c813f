//! SQL query models.
//!
//! Contains the request shape for query execution and the result-set
//! payload shared by the query and table-contents endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for executing a SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Identifier of the pre-configured connection.
    #[validate(length(min = 1, message = "Connection identifier is required"))]
    pub connection_url: String,

    /// SQL statement to execute.
    #[validate(length(min = 1, message = "SQL statement is required"))]
    pub query: String,
}

impl QueryRequest {
    /// Creates a request for the given connection identifier and statement.
    pub fn new(connection_url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            connection_url: connection_url.into(),
            query: query.into(),
        }
    }
}

/// Result set returned by the query and table-contents endpoints.
///
/// `hasRows` discriminates between row-producing statements and statements
/// that completed without output; `keys` and `rows` are absent in the latter
/// case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Whether the statement produced rows.
    pub has_rows: bool,

    /// Column names (empty when `has_rows` is false).
    #[serde(default)]
    pub keys: Vec<String>,

    /// Row data, one vector of JSON values per row.
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl ResultSet {
    /// Creates an empty result set (statement without output).
    pub fn empty() -> Self {
        Self {
            has_rows: false,
            keys: vec![],
            rows: vec![],
        }
    }

    /// Dispatches on the row discriminator, mirroring the envelope helper.
    pub fn match_rows<R>(
        &self,
        on_rows: impl FnOnce(&[String], &[Vec<serde_json::Value>]) -> R,
        on_no_rows: impl FnOnce() -> R,
    ) -> R {
        if self.has_rows {
            on_rows(&self.keys, &self.rows)
        } else {
            on_no_rows()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let req = QueryRequest::new("connectionUrl", "SELECT * FROM t1");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "connectionUrl": "connectionUrl", "query": "SELECT * FROM t1" })
        );
    }

    #[test]
    fn test_result_set_without_rows_parses_with_defaults() {
        let result: ResultSet = serde_json::from_value(json!({ "hasRows": false })).unwrap();
        assert_eq!(result, ResultSet::empty());
    }

    #[test]
    fn test_match_rows_dispatches_on_discriminator() {
        let result: ResultSet = serde_json::from_value(json!({
            "hasRows": true,
            "keys": ["id", "name"],
            "rows": [[1, "a"], [2, "b"]]
        }))
        .unwrap();

        let row_count = result.match_rows(|_, rows| rows.len(), || 0);
        assert_eq!(row_count, 2);

        let none = ResultSet::empty().match_rows(|_, _| false, || true);
        assert!(none);
    }
}
