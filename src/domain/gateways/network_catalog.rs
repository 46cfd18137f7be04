//! Network Catalog Gateway
//!
//! Read-only access to the configured deployment networks.

use crate::domain::models::network::DeploymentNetwork;

/// Catalog of deployment networks, loaded once at startup
pub trait NetworkCatalog: Send + Sync {
    /// All networks, in declaration order
    fn list(&self) -> Vec<DeploymentNetwork>;

    /// Find a network by its exact (case-sensitive) name
    fn find_by_name(&self, name: &str) -> Option<DeploymentNetwork>;
}
