//! Creator Handlers

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::domain::models::content::AccountAddress;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for creator endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/:address/contents", get(get_creator_content))
}

/// GET /creators/:address/contents - Ids registered by a creator, in creation order
///
/// An address that never registered anything yields an empty list.
///
/// # Responses
///
/// * 200 OK - List of content ids
/// * 400 Bad Request - Malformed address
#[axum::debug_handler]
async fn get_creator_content(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<u64>>, ApiError> {
    let creator = AccountAddress::parse(&address)?;

    let ids = state.get_creator_content_use_case.execute(&creator).await?;

    Ok(Json(ids.into_iter().map(|id| id.value()).collect()))
}
