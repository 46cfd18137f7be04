//! Create Content Use Case
//!
//! Registers a new content record attributed to the calling account.

use std::sync::Arc;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{AccountAddress, ContentRecord, ContentSubmission, CreateContentData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new content record
pub struct CreateContentUseCase {
    content_repository: Arc<dyn ContentRepository>,
}

impl CreateContentUseCase {
    /// Create a new CreateContentUseCase
    #[must_use]
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// Execute the use case
    ///
    /// Duplicate hashes and empty tag lists are accepted.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(
        &self,
        creator: AccountAddress,
        submission: ContentSubmission,
    ) -> Result<ContentRecord, UseCaseError> {
        tracing::info!(
            creator = %creator,
            content_hash = %submission.content_hash,
            content_type = submission.content_type.name(),
            tag_count = submission.tags.len(),
            "Creating new content"
        );

        let created = self
            .content_repository
            .append(CreateContentData::new(creator, submission))
            .await?;

        tracing::info!(
            content_id = %created.id(),
            creator = %created.creator(),
            "Content created successfully"
        );

        Ok(created)
    }
}
