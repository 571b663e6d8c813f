//! Client configuration.
//!
//! The server location is externally supplied, read from the environment
//! the same way the services read their own settings.

/// Environment variable naming the SQL server base URL.
pub const BASE_URL_ENV: &str = "SQL_SERVER_BASE_URL";

/// Default base URL (local notebook server).
const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Path prefix of the SQL extension endpoints.
const ENDPOINT_PREFIX: &str = "jupyterlab-sql";

/// Configuration for reaching the SQL server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, stored without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Loads the configuration from the environment, falling back to the
    /// local notebook server default.
    pub fn load() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Creates a configuration for an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the full URL of one extension endpoint.
    ///
    /// # Arguments
    /// * `path` - Endpoint name under the extension prefix (e.g. "database")
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, ENDPOINT_PREFIX, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
