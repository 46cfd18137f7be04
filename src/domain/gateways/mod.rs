//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod content_publisher;
pub mod content_repository;
pub mod network_catalog;

pub use content_publisher::ContentPublisher;
pub use content_repository::ContentRepository;
pub use network_catalog::NetworkCatalog;
