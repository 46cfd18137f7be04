//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::contents::{
    CreateContentUseCase, EngageWithContentUseCase, GetContentByIdUseCase, GetContentCountUseCase,
    GetCreatorContentUseCase,
};
use crate::application::use_cases::networks::{GetDeploymentNetworkByNameUseCase, GetDeploymentNetworksUseCase};
use crate::domain::gateways::{ContentRepository, NetworkCatalog};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_content_use_case: Arc<CreateContentUseCase>,
    pub get_content_by_id_use_case: Arc<GetContentByIdUseCase>,
    pub get_creator_content_use_case: Arc<GetCreatorContentUseCase>,
    pub engage_with_content_use_case: Arc<EngageWithContentUseCase>,
    pub get_content_count_use_case: Arc<GetContentCountUseCase>,
    pub get_deployment_networks_use_case: Arc<GetDeploymentNetworksUseCase>,
    pub get_deployment_network_by_name_use_case: Arc<GetDeploymentNetworkByNameUseCase>,
}

impl AppState {
    /// Wire every use case against one repository and one catalog
    pub fn new(
        config: Arc<AppConfig>,
        content_repository: Arc<dyn ContentRepository>,
        network_catalog: Arc<dyn NetworkCatalog>,
    ) -> Self {
        Self {
            config,
            create_content_use_case: Arc::new(CreateContentUseCase::new(content_repository.clone())),
            get_content_by_id_use_case: Arc::new(GetContentByIdUseCase::new(content_repository.clone())),
            get_creator_content_use_case: Arc::new(GetCreatorContentUseCase::new(content_repository.clone())),
            engage_with_content_use_case: Arc::new(EngageWithContentUseCase::new(content_repository.clone())),
            get_content_count_use_case: Arc::new(GetContentCountUseCase::new(content_repository)),
            get_deployment_networks_use_case: Arc::new(GetDeploymentNetworksUseCase::new(network_catalog.clone())),
            get_deployment_network_by_name_use_case: Arc::new(GetDeploymentNetworkByNameUseCase::new(
                network_catalog,
            )),
        }
    }
}

/// Build the API router with tracing, request ids and the JWT config extension
///
/// CORS and rate limiting are deployment concerns and are layered by the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/contents", handlers::contents::router())
        .nest("/creators", handlers::creators::router())
        .nest("/networks", handlers::networks::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_config_extension,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
