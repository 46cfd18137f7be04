//! Engage With Content Use Case
//!
//! Adds to a content record's engagement score.

use std::sync::Arc;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{AccountAddress, ContentId, ContentRecord};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for engaging with existing content
pub struct EngageWithContentUseCase {
    content_repository: Arc<dyn ContentRepository>,
}

impl EngageWithContentUseCase {
    /// Create a new EngageWithContentUseCase
    #[must_use]
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContentNotFound` ("Content does not exist") if the id is unknown.
    /// Returns `DomainError::EngagementOverflow` if the score would overflow.
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(
        &self,
        user: &AccountAddress,
        id: ContentId,
        amount: u64,
    ) -> Result<ContentRecord, UseCaseError> {
        tracing::info!(content_id = %id, user = %user, amount, "Engaging with content");

        let updated = self
            .content_repository
            .add_engagement(id, amount)
            .await?
            .ok_or_else(|| {
                tracing::warn!(content_id = %id, "Content does not exist");
                DomainError::ContentNotFound(id)
            })?;

        tracing::info!(
            content_id = %id,
            engagement_score = updated.engagement_score(),
            "Engagement recorded"
        );
        Ok(updated)
    }
}
