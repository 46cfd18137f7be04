//! Content Domain Model
//!
//! Represents a registered piece of educational content.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::errors::DomainError;

lazy_static! {
    /// Regex for validating Ethereum addresses
    static ref ACCOUNT_ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex");
}

/// Newtype wrapper for the zero-based sequential content identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(u64);

impl ContentId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for ContentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Account address of a creator or engaging user.
///
/// Stored lowercase so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse a `0x`-prefixed 20-byte hex address
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the value is not 0x followed by 40 hex characters.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if ACCOUNT_ADDRESS_REGEX.is_match(value) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(DomainError::InvalidAddress(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AccountAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Content category, carried on the wire as a `uint8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContentType {
    Video = 0,
    Article = 1,
    Podcast = 2,
    Quiz = 3,
}

impl ContentType {
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Article => "article",
            Self::Podcast => "podcast",
            Self::Quiz => "quiz",
        }
    }
}

impl TryFrom<u8> for ContentType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Video),
            1 => Ok(Self::Article),
            2 => Ok(Self::Podcast),
            3 => Ok(Self::Quiz),
            other => Err(DomainError::InvalidContentType(other)),
        }
    }
}

/// What a caller submits when registering content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSubmission {
    pub content_hash: String,
    pub content_type: ContentType,
    pub tags: Vec<String>,
}

/// Data handed to the repository to append a new record
#[derive(Debug, Clone)]
pub struct CreateContentData {
    pub creator: AccountAddress,
    pub content_hash: String,
    pub content_type: ContentType,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CreateContentData {
    /// Attribute a submission to its creator, stamped with the current time
    #[must_use]
    pub fn new(creator: AccountAddress, submission: ContentSubmission) -> Self {
        Self {
            creator,
            content_hash: submission.content_hash,
            content_type: submission.content_type,
            tags: submission.tags,
            created_at: Utc::now(),
        }
    }
}

/// Content record entity.
///
/// Everything except `engagement_score` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    id: ContentId,
    creator: AccountAddress,
    content_hash: String,
    content_type: ContentType,
    tags: Vec<String>,
    engagement_score: u64,
    created_at: DateTime<Utc>,
}

impl ContentRecord {
    /// Build the record for a freshly assigned id. The score starts at zero.
    #[must_use]
    pub fn new(id: ContentId, data: CreateContentData) -> Self {
        Self {
            id,
            creator: data.creator,
            content_hash: data.content_hash,
            content_type: data.content_type,
            tags: data.tags,
            engagement_score: 0,
            created_at: data.created_at,
        }
    }

    /// Restore a record from persisted data
    #[must_use]
    pub fn restore(
        id: ContentId,
        creator: AccountAddress,
        content_hash: String,
        content_type: ContentType,
        tags: Vec<String>,
        engagement_score: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            creator,
            content_hash,
            content_type,
            tags,
            engagement_score,
            created_at,
        }
    }

    /// Add `amount` to the engagement score, returning the updated record
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EngagementOverflow` if the score would exceed `u64::MAX`.
    pub fn engage(self, amount: u64) -> Result<Self, DomainError> {
        let engagement_score = self
            .engagement_score
            .checked_add(amount)
            .ok_or(DomainError::EngagementOverflow(self.id))?;
        Ok(Self {
            engagement_score,
            ..self
        })
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> ContentId {
        self.id
    }

    #[must_use]
    pub fn creator(&self) -> &AccountAddress {
        &self.creator
    }

    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn engagement_score(&self) -> u64 {
        self.engagement_score
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATOR: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1dEaD";

    fn create_test_data() -> CreateContentData {
        CreateContentData::new(
            AccountAddress::parse(CREATOR).unwrap(),
            ContentSubmission {
                content_hash: "QmTest123".to_string(),
                content_type: ContentType::Video,
                tags: vec!["education".to_string(), "crypto".to_string()],
            },
        )
    }

    #[test]
    fn test_account_address_is_lowercased() {
        let address = AccountAddress::parse(CREATOR).unwrap();
        assert_eq!(address.as_str(), CREATOR.to_ascii_lowercase());
        assert_eq!(address, AccountAddress::parse(&CREATOR.to_ascii_uppercase().replace("0X", "0x")).unwrap());
    }

    #[test]
    fn test_account_address_invalid() {
        assert!(AccountAddress::parse("invalid").is_err());
        assert!(AccountAddress::parse("0x123").is_err());
        assert!(AccountAddress::parse("742d35Cc6634C0532925a3b844Bc9e7595f1dEaD").is_err());
    }

    #[test]
    fn test_content_type_from_u8() {
        assert_eq!(ContentType::try_from(0).unwrap(), ContentType::Video);
        assert_eq!(ContentType::try_from(3).unwrap(), ContentType::Quiz);
        assert!(matches!(
            ContentType::try_from(4),
            Err(DomainError::InvalidContentType(4))
        ));
    }

    #[test]
    fn test_content_id_parse() {
        assert_eq!("42".parse::<ContentId>().unwrap(), ContentId::new(42));
        assert!("-1".parse::<ContentId>().is_err());
        assert!("abc".parse::<ContentId>().is_err());
    }

    #[test]
    fn test_new_record_starts_with_zero_engagement() {
        let data = create_test_data();
        let record = ContentRecord::new(ContentId::new(0), data.clone());

        assert_eq!(record.id(), ContentId::new(0));
        assert_eq!(record.creator(), &data.creator);
        assert_eq!(record.content_hash(), "QmTest123");
        assert_eq!(record.content_type(), ContentType::Video);
        assert_eq!(record.tags(), data.tags.as_slice());
        assert_eq!(record.engagement_score(), 0);
    }

    #[test]
    fn test_engage_adds_amount() {
        let record = ContentRecord::new(ContentId::new(0), create_test_data());
        let record = record.engage(1).unwrap().engage(5).unwrap();
        assert_eq!(record.engagement_score(), 6);
    }

    #[test]
    fn test_engage_rejects_overflow() {
        let record = ContentRecord::new(ContentId::new(7), create_test_data())
            .engage(u64::MAX)
            .unwrap();
        assert!(matches!(
            record.engage(1),
            Err(DomainError::EngagementOverflow(id)) if id == ContentId::new(7)
        ));
    }
}
