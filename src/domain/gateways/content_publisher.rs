//! Content Publisher Gateway
//!
//! Outbound port the publishing agent uses to submit drafts to a registry.

use async_trait::async_trait;

use crate::domain::models::content::{ContentRecord, ContentSubmission};
use crate::shared::errors::PublisherError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentPublisher: Send + Sync {
    /// Register a submission and return the record the registry created
    async fn publish(&self, submission: &ContentSubmission) -> Result<ContentRecord, PublisherError>;
}
