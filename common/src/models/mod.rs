//! Wire models for the server API.

pub mod database;
pub mod query;
pub mod table;

// Re-export commonly used types
pub use database::{DatabaseStructure, DatabaseStructureRequest};
pub use query::{QueryRequest, ResultSet};
pub use table::TableContentsRequest;
