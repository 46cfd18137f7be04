//! Get Deployment Network By Name Use Case

use std::sync::Arc;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::DeploymentNetwork;
use crate::shared::errors::UseCaseError;

/// Use case for looking up a single deployment network
pub struct GetDeploymentNetworkByNameUseCase {
    network_catalog: Arc<dyn NetworkCatalog>,
}

impl GetDeploymentNetworkByNameUseCase {
    #[must_use]
    pub fn new(network_catalog: Arc<dyn NetworkCatalog>) -> Self {
        Self { network_catalog }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no network has this name.
    pub fn execute(&self, name: &str) -> Result<DeploymentNetwork, UseCaseError> {
        tracing::debug!(network = name, "Getting deployment network");

        self.network_catalog.find_by_name(name).ok_or_else(|| {
            tracing::warn!(network = name, "Deployment network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                id: name.to_string(),
            }
        })
    }
}
