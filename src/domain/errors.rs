// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field is not writable: {0}")]
    ReadOnlyField(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
