//! Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected at the boundary before reaching the store
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Write rejected by a storage-level constraint (e.g. duplicate email)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The bound session is closed or unusable
    #[error("Session error: {0}")]
    Session(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether the caller sent something wrong (as opposed to a server fault).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::ConstraintViolation(_) | Self::NotFound { .. }
        )
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
