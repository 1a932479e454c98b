//! Structured query handler

use axum::{extract::State, response::Response};
use moafinder_core::FieldExtractor;

use super::respond;
use crate::{error::ApiResult, payload::RawPayload, state::AppState};

/// Structured query: `type` picks the intent, `value` carries its parameter
#[utoipa::path(
    post,
    path = "/query",
    params(
        ("type" = String, Query, description = "shop | category | popular"),
        ("value" = Option<String>, Query, description = "Shop name or category filter; ignored for popular"),
        ("category" = Option<String>, Query, description = "Category filter when type=category and value is absent"),
    ),
    responses(
        (status = 200, description = "Query answered", body = serde_json::Value),
        (status = 400, description = "Missing or invalid type, or missing shop name", body = crate::models::ErrorResponse),
        (status = 404, description = "Nothing matched", body = serde_json::Value)
    )
)]
pub async fn structured(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    let kind = FieldExtractor::field(&payload, "type");
    let value = FieldExtractor::field(&payload, "value")
        .or_else(|| match kind.as_deref() {
            Some("category") => FieldExtractor::field(&payload, "category"),
            _ => None,
        })
        .or_else(|| {
            Some(FieldExtractor::new().extract(&payload)).filter(|value| !value.is_empty())
        });
    let result = state
        .resolver
        .structured(kind.as_deref(), value.as_deref())?;
    Ok(respond(result))
}
