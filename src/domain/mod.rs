//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ContentPublisher, ContentRepository, NetworkCatalog};
pub use models::content::{AccountAddress, ContentId, ContentRecord, ContentSubmission, ContentType, CreateContentData};
pub use models::network::DeploymentNetwork;
