//! Get Deployment Networks Use Case
//!
//! Lists every configured deployment network.

use std::sync::Arc;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::DeploymentNetwork;

/// Use case for listing deployment networks
pub struct GetDeploymentNetworksUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl GetDeploymentNetworksUseCase {
    /// Create a new GetDeploymentNetworksUseCase
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<DeploymentNetwork> {
        tracing::debug!("Getting deployment networks");

        let networks = self.network_catalog.list();

        tracing::debug!(count = networks.len(), "Found deployment networks");
        networks
    }
}
