//! Shared building blocks for the SQL server data-access layer.

pub mod config;
pub mod errors;
pub mod models;
pub mod response;
