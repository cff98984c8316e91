//! Slug create and lookup endpoints

use axum::extract::{Path, State};
use axum::Json;

use super::state::AppState;
use super::types::{ApiError, SlugResponse};

/// `GET /save/{userType}/{userId}/{action}`
///
/// Creates a record with the default TTL and returns the slug as a plain
/// text body.
pub async fn create_slug(
    State(state): State<AppState>,
    Path((user_type, user_id, action)): Path<(String, String, String)>,
) -> Result<String, ApiError> {
    let slug = state
        .slug_service
        .create(&user_type, &user_id, &action, None)
        .await?;

    Ok(slug)
}

/// `GET /save/{userType}/{userId}/{action}/{ttl}`
///
/// Same as [`create_slug`] with a caller-supplied TTL in seconds. A TTL
/// outside `(0, max]` or one that isn't a number falls back to the default
/// rather than failing the request.
pub async fn create_slug_with_ttl(
    State(state): State<AppState>,
    Path((user_type, user_id, action, ttl)): Path<(String, String, String, String)>,
) -> Result<String, ApiError> {
    let slug = state
        .slug_service
        .create(&user_type, &user_id, &action, Some(&ttl))
        .await?;

    Ok(slug)
}

/// `GET /lookup/{slug}`
///
/// Resolves a slug back to its record. A slug that was never created and
/// one that has expired both yield the 404 body.
pub async fn lookup_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SlugResponse>, ApiError> {
    let record = state.slug_service.lookup(&slug).await?;

    Ok(Json(record.into()))
}
