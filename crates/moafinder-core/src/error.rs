//! Error types for the directory and the query resolver

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building the shop directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Shop key cannot be empty")]
    EmptyKey,

    #[error("Duplicate shop key: {0}")]
    DuplicateKey(String),

    #[error("Alias '{alias}' points to unknown shop '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
}

/// Client-side problems with a query.
///
/// Classification itself never fails; these only describe requests that
/// cannot be classified because a required value is missing or invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str, hint: String },

    #[error("Invalid {field} '{value}'")]
    InvalidDiscriminator {
        field: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },
}

impl QueryError {
    /// Human readable hint shown to chat clients
    pub fn hint(&self) -> String {
        match self {
            QueryError::MissingField { hint, .. } => hint.clone(),
            QueryError::InvalidDiscriminator { field, accepted, .. } => {
                format!("Use {} = {}", field, accepted.join(" | "))
            }
        }
    }
}

/// Umbrella error for the core crate
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}
