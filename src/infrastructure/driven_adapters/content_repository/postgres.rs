//! PostgreSQL Content Repository Implementation
//!
//! Implements the ContentRepository trait using SQLx for PostgreSQL.
//! Ids come from the single-row `registry_counter` table, bumped inside the
//! insert transaction so a rolled-back insert never leaves a gap.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{AccountAddress, ContentId, ContentRecord, ContentType, CreateContentData};
use crate::shared::errors::{DomainError, RepositoryError};

/// Database row representation for the contents table
#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: i64,
    creator: String,
    content_hash: String,
    content_type: i16,
    tags: serde_json::Value,
    engagement_score: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentRecord {
    type Error = RepositoryError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_value(row.tags)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse tags: {e}")))?;
        let content_type = u8::try_from(row.content_type)
            .map_err(|_| RepositoryError::Mapping(format!("content_type {} out of range", row.content_type)))
            .and_then(|raw| {
                ContentType::try_from(raw).map_err(|e| RepositoryError::Mapping(e.to_string()))
            })?;

        Ok(ContentRecord::restore(
            ContentId::new(to_u64(row.id, "id")?),
            AccountAddress::parse(&row.creator).map_err(|e| RepositoryError::Mapping(e.to_string()))?,
            row.content_hash,
            content_type,
            tags,
            to_u64(row.engagement_score, "engagement_score")?,
            row.created_at,
        ))
    }
}

fn to_u64(value: i64, column: &str) -> Result<u64, RepositoryError> {
    u64::try_from(value).map_err(|_| RepositoryError::Mapping(format!("{column} {value} is negative")))
}

/// Ids beyond `i64::MAX` cannot be stored, so they cannot exist
fn to_db_id(id: ContentId) -> Option<i64> {
    i64::try_from(id.value()).ok()
}

/// PostgreSQL implementation of ContentRepository
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Create a new PostgresContentRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, creator, content_hash, content_type, tags, engagement_score, created_at";

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn append(&self, data: CreateContentData) -> Result<ContentRecord, RepositoryError> {
        let tags_json = serde_json::to_value(&data.tags)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize tags: {e}")))?;

        let mut tx = self.pool.begin().await?;

        // Row lock on the counter serializes concurrent creators
        let id: i64 = sqlx::query_scalar(
            r#"
            UPDATE registry_counter
            SET next_id = next_id + 1
            WHERE singleton
            RETURNING next_id - 1
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            r#"
            INSERT INTO contents (id, creator, content_hash, content_type, tags, engagement_score, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(data.creator.as_str())
        .bind(&data.content_hash)
        .bind(i16::from(data.content_type.as_u8()))
        .bind(&tags_json)
        .bind(data.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        ContentRecord::try_from(row)
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<ContentRecord>, RepositoryError> {
        let Some(db_id) = to_db_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM contents WHERE id = $1"
        ))
        .bind(db_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ContentRecord::try_from).transpose()
    }

    async fn find_ids_by_creator(&self, creator: &AccountAddress) -> Result<Vec<ContentId>, RepositoryError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM contents
            WHERE creator = $1
            ORDER BY id ASC
            "#,
        )
        .bind(creator.as_str())
        .fetch_all(&self.pool)
        .await?;

        ids.into_iter()
            .map(|id| to_u64(id, "id").map(ContentId::new))
            .collect()
    }

    async fn add_engagement(&self, id: ContentId, amount: u64) -> Result<Option<ContentRecord>, RepositoryError> {
        let Some(db_id) = to_db_id(id) else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM contents WHERE id = $1 FOR UPDATE"
        ))
        .bind(db_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let updated = ContentRecord::try_from(row)?.engage(amount)?;
        // BIGINT column: scores past i64::MAX overflow here
        let score = i64::try_from(updated.engagement_score()).map_err(|_| DomainError::EngagementOverflow(id))?;

        sqlx::query("UPDATE contents SET engagement_score = $2 WHERE id = $1")
            .bind(db_id)
            .bind(score)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(updated))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contents")
            .fetch_one(&self.pool)
            .await?;
        to_u64(count, "count")
    }
}
