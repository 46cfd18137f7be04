//! Network Use Cases
//!
//! Read-only access to the deployment network catalog.

mod get_deployment_network_by_name;
mod get_deployment_networks;

pub use get_deployment_network_by_name::GetDeploymentNetworkByNameUseCase;
pub use get_deployment_networks::GetDeploymentNetworksUseCase;
