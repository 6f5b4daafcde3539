use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
