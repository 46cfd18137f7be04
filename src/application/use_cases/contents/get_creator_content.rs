//! Get Creator Content Use Case
//!
//! Lists the ids of every content record an account created.

use std::sync::Arc;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{AccountAddress, ContentId};
use crate::shared::errors::UseCaseError;

/// Use case for listing a creator's content ids
pub struct GetCreatorContentUseCase {
    content_repository: Arc<dyn ContentRepository>,
}

impl GetCreatorContentUseCase {
    /// Create a new GetCreatorContentUseCase
    #[must_use]
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// Execute the use case. Unknown creators yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(&self, creator: &AccountAddress) -> Result<Vec<ContentId>, UseCaseError> {
        tracing::debug!(creator = %creator, "Getting creator content");

        let ids = self.content_repository.find_ids_by_creator(creator).await?;

        tracing::debug!(creator = %creator, count = ids.len(), "Found creator content");
        Ok(ids)
    }
}
