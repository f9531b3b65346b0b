//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// A field failed validation. Always names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} `{field}` in request body")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    /// The field was absent or blank.
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: "Missing",
        }
    }

    /// The field was present but had the wrong type or format.
    pub fn invalid(field: &'static str) -> Self {
        Self {
            field,
            reason: "Invalid",
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_field() {
        let err = ValidationError::missing("title");
        assert_eq!(err.to_string(), "Missing `title` in request body");

        let err = ValidationError::invalid("date");
        assert_eq!(err.to_string(), "Invalid `date` in request body");
    }

    #[test]
    fn repo_error_wraps_validation_transparently() {
        let err: RepoError = ValidationError::missing("author.firstName").into();
        assert_eq!(
            err.to_string(),
            "Missing `author.firstName` in request body"
        );
    }
}
