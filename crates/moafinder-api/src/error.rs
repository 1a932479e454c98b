//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moafinder_core::{CoreError, QueryError};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request field
    #[error("{message}")]
    BadRequest {
        /// Error message
        message: String,
        /// What the caller should send instead
        hint: String,
    },

    /// Unknown route
    #[error("{0}")]
    NotFound(String),

    /// Unhandled fault
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Directory could not be built
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        let message = match &err {
            QueryError::MissingField { field: "shop", .. } => {
                "Please provide a shop name".to_string()
            }
            other => other.to_string(),
        };
        ApiError::BadRequest {
            message,
            hint: err.hint(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { message, hint } => {
                tracing::debug!(error = %message, "Rejecting request");
                let body = Json(json!({
                    "error": message,
                    "formatted_response": format!("❌ {hint}"),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(_) | ApiError::Core(_) | ApiError::Config(_) => {
                tracing::error!(error = %self, "Request failed");
                let body = Json(json!({ "error": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let missing: ApiError = QueryError::MissingField {
            field: "shop",
            hint: "Please provide a shop name to search.".into(),
        }
        .into();
        assert_eq!(missing.to_string(), "Please provide a shop name");
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            ApiError::NotFound("Endpoint not found".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_discriminator_hint_lists_accepted_values() {
        let err: ApiError = QueryError::InvalidDiscriminator {
            field: "type",
            value: "weather".into(),
            accepted: vec!["shop", "category", "popular"],
        }
        .into();
        match err {
            ApiError::BadRequest { hint, .. } => {
                assert_eq!(hint, "Use type = shop | category | popular")
            }
            other => panic!("Expected bad request, got {other:?}"),
        }
    }
}
