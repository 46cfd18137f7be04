//! Network Handlers
//!
//! Read-only views of the configured deployment networks.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::network::NetworkResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_deployment_networks))
        .route("/:name", get(get_deployment_network_by_name))
}

/// GET /networks - All deployment networks in declaration order
#[axum::debug_handler]
async fn get_deployment_networks(State(state): State<AppState>) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.get_deployment_networks_use_case.execute();
    Json(networks.iter().map(NetworkResponseDto::from).collect())
}

/// GET /networks/:name - A deployment network by name
///
/// # Responses
///
/// * 200 OK - Network found
/// * 404 Not Found - No network with that name
#[axum::debug_handler]
async fn get_deployment_network_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let network = state.get_deployment_network_by_name_use_case.execute(&name)?;
    Ok(Json(NetworkResponseDto::from(network)))
}
