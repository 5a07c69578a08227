use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::warn;

use crate::domain::DomainError;

/// Client-facing text for a rejected duplicate email. Driver detail stays in the logs.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
            warn!(%detail, "Unique constraint violated");
            return DomainError::ConstraintViolation(DUPLICATE_EMAIL_MESSAGE.to_string());
        }
        match e {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => DomainError::Session(e.to_string()),
            other => DomainError::Storage(other.to_string()),
        }
    }
}
