//! Content DTOs
//!
//! Data transfer objects for content registry endpoints. Field names follow
//! the registry's call surface (`contentHash`, `contentType`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::content::{AccountAddress, ContentId, ContentRecord, ContentSubmission, ContentType};
use crate::shared::errors::DomainError;

/// Validates every tag's length
fn validate_tags(tags: &[String]) -> Result<(), validator::ValidationError> {
    for tag in tags {
        if tag.chars().count() > 64 {
            let mut error = validator::ValidationError::new("tag_length");
            error.message = Some("Each tag must be at most 64 characters".into());
            return Err(error);
        }
    }
    Ok(())
}

/// DTO for creating content
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentDto {
    #[validate(length(max = 512, message = "contentHash must be at most 512 characters"))]
    pub content_hash: String,

    pub content_type: u8,

    #[serde(default)]
    #[validate(length(max = 32, message = "tags can have at most 32 items"))]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

impl TryFrom<CreateContentDto> for ContentSubmission {
    type Error = DomainError;

    fn try_from(dto: CreateContentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            content_hash: dto.content_hash,
            content_type: ContentType::try_from(dto.content_type)?,
            tags: dto.tags,
        })
    }
}

impl From<&ContentSubmission> for CreateContentDto {
    fn from(submission: &ContentSubmission) -> Self {
        Self {
            content_hash: submission.content_hash.clone(),
            content_type: submission.content_type.as_u8(),
            tags: submission.tags.clone(),
        }
    }
}

fn default_amount() -> u64 {
    1
}

/// DTO for engaging with content; `amount` defaults to 1
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngageContentDto {
    #[serde(default = "default_amount")]
    pub amount: u64,
}

impl Default for EngageContentDto {
    fn default() -> Self {
        Self {
            amount: default_amount(),
        }
    }
}

/// Content record response DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponseDto {
    pub id: u64,
    pub creator: String,
    pub content_hash: String,
    pub content_type: u8,
    pub content_type_name: String,
    pub tags: Vec<String>,
    pub engagement_score: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&ContentRecord> for ContentResponseDto {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id().value(),
            creator: record.creator().to_string(),
            content_hash: record.content_hash().to_string(),
            content_type: record.content_type().as_u8(),
            content_type_name: record.content_type().name().to_string(),
            tags: record.tags().to_vec(),
            engagement_score: record.engagement_score(),
            created_at: record.created_at(),
        }
    }
}

impl From<ContentRecord> for ContentResponseDto {
    fn from(record: ContentRecord) -> Self {
        Self::from(&record)
    }
}

impl TryFrom<ContentResponseDto> for ContentRecord {
    type Error = DomainError;

    fn try_from(dto: ContentResponseDto) -> Result<Self, Self::Error> {
        Ok(ContentRecord::restore(
            ContentId::new(dto.id),
            AccountAddress::parse(&dto.creator)?,
            dto.content_hash,
            ContentType::try_from(dto.content_type)?,
            dto.tags,
            dto.engagement_score,
            dto.created_at,
        ))
    }
}

/// Registry length response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCountDto {
    pub count: u64,
}
