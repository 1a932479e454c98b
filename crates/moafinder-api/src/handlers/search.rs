//! Shop search handlers

use axum::{extract::State, response::Response};
use moafinder_core::{EmptyQueryPolicy, FieldExtractor};

use super::respond;
use crate::{error::ApiResult, payload::RawPayload, state::AppState};

/// Search for a shop by name
#[utoipa::path(
    post,
    path = "/search",
    params(
        ("shop" = Option<String>, Query, description = "Shop name; name, query, text, message, user_input, user_message and content are also read"),
    ),
    responses(
        (status = 200, description = "One shop, or several shops to choose from", body = serde_json::Value),
        (status = 400, description = "No shop name given", body = crate::models::ErrorResponse),
        (status = 404, description = "No shop matched", body = serde_json::Value)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    let query = FieldExtractor::new().extract(&payload);
    tracing::debug!(query = %query, "Shop search");
    Ok(respond(state.resolver.search(&query, EmptyQueryPolicy::Reject)?))
}

/// Search for a shop from an arbitrary chatbot webhook payload.
///
/// When none of the known fields is present, the first non-empty string
/// value of the payload is used.
#[utoipa::path(
    post,
    path = "/webhook",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "One shop, or several shops to choose from", body = serde_json::Value),
        (status = 400, description = "No shop name found in the payload", body = crate::models::ErrorResponse),
        (status = 404, description = "No shop matched", body = serde_json::Value)
    )
)]
pub async fn webhook(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    let query = FieldExtractor::webhook().extract(&payload);
    tracing::debug!(query = %query, "Webhook shop search");
    Ok(respond(state.resolver.search(&query, EmptyQueryPolicy::Reject)?))
}
