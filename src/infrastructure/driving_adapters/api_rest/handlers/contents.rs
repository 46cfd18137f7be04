//! Content Handlers
//!
//! HTTP handlers for the content registry.
//! Creation and engagement require JWT authentication; reads are public.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::content::{ContentId, ContentSubmission};
use crate::infrastructure::driving_adapters::api_rest::dto::content::{
    ContentCountDto, ContentResponseDto, CreateContentDto, EngageContentDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for content endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_content))
        .route("/count", get(get_content_count))
        .route("/:id", get(get_content_by_id))
        .route("/:id/engagements", post(engage_with_content))
}

fn parse_content_id(raw: &str) -> Result<ContentId, ApiError> {
    raw.parse::<ContentId>()
        .map_err(|_| ApiError::InvalidContentId(format!("'{raw}' is not a non-negative integer")))
}

/// POST /contents - Register new content as the authenticated account
///
/// # Responses
///
/// * 201 Created - Content created, body carries the assigned id
/// * 400 Bad Request - Malformed body, validation error or unknown content type
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn create_content(
    JwtAuth(account): JwtAuth,
    State(state): State<AppState>,
    payload: Result<Json<CreateContentDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ContentResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;
    let submission = ContentSubmission::try_from(dto)?;

    let record = state
        .create_content_use_case
        .execute(account.address, submission)
        .await?;

    Ok((StatusCode::CREATED, Json(ContentResponseDto::from(record))))
}

/// GET /contents/count - Number of registered records
#[axum::debug_handler]
async fn get_content_count(State(state): State<AppState>) -> Result<Json<ContentCountDto>, ApiError> {
    let count = state.get_content_count_use_case.execute().await?;
    Ok(Json(ContentCountDto { count }))
}

/// GET /contents/:id - Look up a record
///
/// # Responses
///
/// * 200 OK - Content found
/// * 400 Bad Request - Id is not a non-negative integer
/// * 404 Not Found - "Content does not exist"
#[axum::debug_handler]
async fn get_content_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentResponseDto>, ApiError> {
    let id = parse_content_id(&id)?;

    let record = state.get_content_by_id_use_case.execute(id).await?;

    Ok(Json(ContentResponseDto::from(record)))
}

/// POST /contents/:id/engagements - Add to a record's engagement score
///
/// The body is optional; `amount` defaults to 1.
///
/// # Responses
///
/// * 200 OK - Updated record
/// * 400 Bad Request - Malformed id or body
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - "Content does not exist"
/// * 409 Conflict - Engagement score would overflow
#[axum::debug_handler]
async fn engage_with_content(
    JwtAuth(account): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ContentResponseDto>, ApiError> {
    let id = parse_content_id(&id)?;
    let dto: EngageContentDto = if body.is_empty() {
        EngageContentDto::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?
    };

    let record = state
        .engage_with_content_use_case
        .execute(&account.address, id, dto.amount)
        .await?;

    Ok(Json(ContentResponseDto::from(record)))
}
