//! Get Content By ID Use Case
//!
//! Retrieves a single content record by its id.

use std::sync::Arc;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{ContentId, ContentRecord};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for looking up content by id
pub struct GetContentByIdUseCase {
    content_repository: Arc<dyn ContentRepository>,
}

impl GetContentByIdUseCase {
    /// Create a new GetContentByIdUseCase
    #[must_use]
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContentNotFound` if the id is out of range.
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(&self, id: ContentId) -> Result<ContentRecord, UseCaseError> {
        tracing::debug!(content_id = %id, "Getting content by ID");

        let record = self.content_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(content_id = %id, "Content not found");
            DomainError::ContentNotFound(id)
        })?;

        tracing::debug!(content_id = %id, "Content found");
        Ok(record)
    }
}
