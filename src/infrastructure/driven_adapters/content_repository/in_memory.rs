//! In-Memory Content Repository
//!
//! Registry state lives behind a single `RwLock`; every mutation holds the
//! write lock for its whole critical section, so operations apply one at a
//! time in arrival order.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{AccountAddress, ContentId, ContentRecord, CreateContentData};
use crate::shared::errors::RepositoryError;

#[derive(Default)]
struct RegistryState {
    records: Vec<ContentRecord>,
    by_creator: HashMap<AccountAddress, Vec<ContentId>>,
}

/// Process-lifetime implementation of ContentRepository
#[derive(Default)]
pub struct InMemoryContentRepository {
    state: RwLock<RegistryState>,
}

impl InMemoryContentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_of(id: ContentId) -> Option<usize> {
    usize::try_from(id.value()).ok()
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn append(&self, data: CreateContentData) -> Result<ContentRecord, RepositoryError> {
        let mut state = self.state.write().await;

        let id = ContentId::new(state.records.len() as u64);
        let creator = data.creator.clone();
        let record = ContentRecord::new(id, data);

        state.records.push(record.clone());
        state.by_creator.entry(creator).or_default().push(id);

        Ok(record)
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<ContentRecord>, RepositoryError> {
        let state = self.state.read().await;
        Ok(index_of(id).and_then(|i| state.records.get(i)).cloned())
    }

    async fn find_ids_by_creator(&self, creator: &AccountAddress) -> Result<Vec<ContentId>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.by_creator.get(creator).cloned().unwrap_or_default())
    }

    async fn add_engagement(&self, id: ContentId, amount: u64) -> Result<Option<ContentRecord>, RepositoryError> {
        let mut state = self.state.write().await;

        let Some(index) = index_of(id).filter(|&i| i < state.records.len()) else {
            return Ok(None);
        };

        let updated = state.records[index].clone().engage(amount)?;
        state.records[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.read().await.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::content::{ContentSubmission, ContentType};
    use crate::shared::errors::DomainError;
    use std::sync::Arc;

    fn address(value: &str) -> AccountAddress {
        AccountAddress::parse(value).unwrap()
    }

    fn data(creator: &AccountAddress, hash: &str) -> CreateContentData {
        CreateContentData::new(
            creator.clone(),
            ContentSubmission {
                content_hash: hash.to_string(),
                content_type: ContentType::Article,
                tags: vec!["test".to_string()],
            },
        )
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_indexed_per_creator() {
        let repo = InMemoryContentRepository::new();
        let alice = address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        let bob = address("0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

        let first = repo.append(data(&alice, "QmA")).await.unwrap();
        let second = repo.append(data(&bob, "QmB")).await.unwrap();
        let third = repo.append(data(&alice, "QmC")).await.unwrap();

        assert_eq!(first.id(), ContentId::new(0));
        assert_eq!(second.id(), ContentId::new(1));
        assert_eq!(third.id(), ContentId::new(2));
        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(
            repo.find_ids_by_creator(&alice).await.unwrap(),
            vec![ContentId::new(0), ContentId::new(2)]
        );
        assert_eq!(repo.find_ids_by_creator(&bob).await.unwrap(), vec![ContentId::new(1)]);
    }

    #[tokio::test]
    async fn test_find_by_id_out_of_range() {
        let repo = InMemoryContentRepository::new();
        assert!(repo.find_by_id(ContentId::new(0)).await.unwrap().is_none());
        assert!(repo.find_by_id(ContentId::new(u64::MAX)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_engagement() {
        let repo = InMemoryContentRepository::new();
        let alice = address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        repo.append(data(&alice, "QmA")).await.unwrap();

        let updated = repo.add_engagement(ContentId::new(0), 1).await.unwrap().unwrap();
        assert_eq!(updated.engagement_score(), 1);
        let updated = repo.add_engagement(ContentId::new(0), 4).await.unwrap().unwrap();
        assert_eq!(updated.engagement_score(), 5);

        assert!(repo.add_engagement(ContentId::new(999), 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overflow_leaves_score_unchanged() {
        let repo = InMemoryContentRepository::new();
        let alice = address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        repo.append(data(&alice, "QmA")).await.unwrap();
        repo.add_engagement(ContentId::new(0), u64::MAX).await.unwrap();

        let err = repo.add_engagement(ContentId::new(0), 1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Domain(DomainError::EngagementOverflow(_))));

        let stored = repo.find_by_id(ContentId::new(0)).await.unwrap().unwrap();
        assert_eq!(stored.engagement_score(), u64::MAX);
    }

    #[tokio::test]
    async fn test_concurrent_appends_receive_distinct_consecutive_ids() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let alice = address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                let creator = alice.clone();
                tokio::spawn(async move { repo.append(data(&creator, &format!("Qm{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id().value());
        }
        ids.sort_unstable();

        assert_eq!(ids, (0..32).collect::<Vec<u64>>());
        assert_eq!(repo.find_ids_by_creator(&alice).await.unwrap().len(), 32);
    }
}
