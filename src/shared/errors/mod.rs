//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::content::ContentId;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Content does not exist")]
    ContentNotFound(ContentId),

    #[error("Invalid content type: {0}")]
    InvalidContentType(u8),

    #[error("Invalid account address: {0}")]
    InvalidAddress(String),

    #[error("Engagement score overflow for content {0}")]
    EngagementOverflow(ContentId),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Data mapping error: {0}")]
    Mapping(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Domain(domain) => Self::Domain(domain),
            other => Self::Repository(other),
        }
    }
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Domain(DomainError::InvalidContentType(_) | DomainError::InvalidAddress(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } | Self::Domain(DomainError::ContentNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::EngagementOverflow(_)) => StatusCode::CONFLICT,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::ContentNotFound(_)) => "CONTENT_NOT_FOUND",
            Self::Domain(DomainError::InvalidContentType(_)) => "INVALID_CONTENT_TYPE",
            Self::Domain(DomainError::InvalidAddress(_)) => "INVALID_ADDRESS",
            Self::Domain(DomainError::EngagementOverflow(_)) => "ENGAGEMENT_OVERFLOW",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// Errors raised by the publishing agent's registry client
#[derive(Debug, Error)]
pub enum PublisherError {
    #[error("Registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Registry rejected content ({status}): {code}: {message}")]
    Rejected { status: u16, code: String, message: String },

    #[error("Malformed registry response: {0}")]
    MalformedResponse(String),
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid content id: {0}")]
    InvalidContentId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Error response body structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                if let UseCaseError::Repository(err) = uc_error {
                    tracing::error!(error = %err, "Repository failure");
                }
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.to_string(), details)
            }
            ApiError::InvalidContentId(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_CONTENT_ID".to_string(), msg.clone(), None)
            }
            ApiError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
        };

        // Repository failures carry driver details that stay in the logs
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An unexpected error occurred".to_string()
        } else {
            message
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message, details },
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
