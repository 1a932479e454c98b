//! API route handlers

pub mod category;
pub mod desk;
pub mod health;
pub mod query;
pub mod search;
pub mod shops;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moafinder_core::{format, MatchResult};

use crate::error::ApiError;

/// Render a resolver result: 404 for misses, 200 otherwise
pub(crate) fn respond(result: MatchResult) -> Response {
    let status = if result.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(format::envelope(&result))).into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}
