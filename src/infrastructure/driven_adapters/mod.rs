//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Content repositories (PostgreSQL, in-memory)
//! - Deployment network catalog built from configuration
//! - Configuration
//! - HTTP client for a remote registry

pub mod config;
pub mod content_repository;
pub mod database;
pub mod network_catalog;
pub mod registry_client;

pub use config::AppConfig;
pub use content_repository::{InMemoryContentRepository, PostgresContentRepository};
pub use network_catalog::ConfiguredNetworkCatalog;
pub use registry_client::HttpContentPublisher;
