//! Content Repository Gateway
//!
//! Abstract trait defining the contract for content registry persistence.

use async_trait::async_trait;

use crate::domain::models::content::{AccountAddress, ContentId, ContentRecord, CreateContentData};
use crate::shared::errors::RepositoryError;

/// Repository trait for the append-only content registry.
///
/// Every method is one atomic step: implementations serialize mutations so
/// ids are assigned gaplessly in insertion order.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Append a record, assigning the next sequential id and indexing it under its creator
    async fn append(&self, data: CreateContentData) -> Result<ContentRecord, RepositoryError>;

    /// Find a record by its id
    async fn find_by_id(&self, id: ContentId) -> Result<Option<ContentRecord>, RepositoryError>;

    /// All ids authored by `creator`, in creation order
    async fn find_ids_by_creator(&self, creator: &AccountAddress) -> Result<Vec<ContentId>, RepositoryError>;

    /// Add `amount` to a record's engagement score.
    ///
    /// Returns `None` when the id does not exist. Overflow is reported as
    /// `RepositoryError::Domain` and leaves the score unchanged.
    async fn add_engagement(&self, id: ContentId, amount: u64) -> Result<Option<ContentRecord>, RepositoryError>;

    /// Number of records in the registry
    async fn count(&self) -> Result<u64, RepositoryError>;
}
