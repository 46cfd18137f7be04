//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod content;
pub mod draft;
pub mod network;

pub use content::{AccountAddress, ContentId, ContentRecord, ContentSubmission, ContentType, CreateContentData};
pub use draft::EducationalDraft;
pub use network::{CredentialSource, DeploymentNetwork, ExplorerUrls};
