//! Error types for rust-modelgen

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating models from a database schema
#[derive(Error, Debug)]
pub enum ModelGenError {
    #[error("Failed to reach database {target}")]
    Connectivity {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to read schema for table {table}: {message}")]
    Schema { table: String, message: String },

    #[error("Failed to query schema for table {table}")]
    SchemaQuery {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to write model to {path}")]
    Emit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid connection string: {message}")]
    InvalidConnectionString { message: String },

    #[error("Failed to start database runtime")]
    Runtime {
        #[source]
        source: std::io::Error,
    },
}
