//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod agent;
pub mod contents;
pub mod networks;

pub use agent::{PublishReport, PublishTopicsUseCase};
pub use contents::{
    CreateContentUseCase, EngageWithContentUseCase, GetContentByIdUseCase, GetContentCountUseCase,
    GetCreatorContentUseCase,
};
pub use networks::{GetDeploymentNetworkByNameUseCase, GetDeploymentNetworksUseCase};
