use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Errors surfaced by handlers. Every variant renders as a plain-text body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a failed mutation, keeping not-found distinct and prefixing
    /// everything else with the action that failed.
    pub fn failed(action: &str, e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::Validation(_) | DomainError::Storage(_) => {
                AppError::Internal(format!("An error occurred while {}: {}", action, e))
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::Validation(_) | DomainError::Storage(_) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Failures while booting the server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create database connection pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
