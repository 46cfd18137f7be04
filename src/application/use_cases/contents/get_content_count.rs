//! Get Content Count Use Case

use std::sync::Arc;

use crate::domain::gateways::ContentRepository;
use crate::shared::errors::UseCaseError;

/// Use case for reading the registry length
pub struct GetContentCountUseCase {
    content_repository: Arc<dyn ContentRepository>,
}

impl GetContentCountUseCase {
    #[must_use]
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(&self) -> Result<u64, UseCaseError> {
        let count = self.content_repository.count().await?;
        tracing::debug!(count, "Counted registry content");
        Ok(count)
    }
}
