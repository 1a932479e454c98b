//! Free-text Q&A handlers: traffic desk, company info and the assistant
//!
//! Each endpoint family keeps its own cascade. An empty question is answered
//! with the cascade's fallback instead of an error.

use axum::{extract::State, response::Response};
use moafinder_core::{
    Cascade, EmptyQueryPolicy, FieldExtractor, Payload, ASSISTANT, COMPANY_DESK, TRAFFIC_DESK,
};

use super::respond;
use crate::{error::ApiResult, payload::RawPayload, state::AppState};

fn answer(state: &AppState, cascade: &Cascade, payload: &Payload) -> ApiResult<Response> {
    if !cascade.topics.is_empty() {
        if let Some(topic) = FieldExtractor::field(payload, "category") {
            return Ok(respond(state.resolver.ask_topic(cascade, &topic)?));
        }
    }

    let query = FieldExtractor::new().extract(payload);
    tracing::debug!(cascade = cascade.name, query = %query, "Answering question");
    let result = state
        .resolver
        .ask(cascade, &query, EmptyQueryPolicy::Fallback)?;
    Ok(respond(result))
}

/// Parking, public transport and traffic questions
#[utoipa::path(
    post,
    path = "/traffic",
    params(
        ("query" = Option<String>, Query, description = "Free-text question"),
        ("category" = Option<String>, Query, description = "parking_rates | parking_locations | parking | public_transport | traffic_tips | walking_directions"),
    ),
    responses(
        (status = 200, description = "Answer or topic menu", body = serde_json::Value),
        (status = 400, description = "Unknown category", body = crate::models::ErrorResponse)
    )
)]
pub async fn traffic(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    answer(&state, &TRAFFIC_DESK, &payload)
}

/// Facts about the mall: history, ownership, size, facilities and events
#[utoipa::path(
    post,
    path = "/company",
    params(
        ("query" = Option<String>, Query, description = "Free-text question"),
        ("category" = Option<String>, Query, description = "overview | facilities | statistics | history | ownership | events"),
    ),
    responses(
        (status = 200, description = "Answer, or the mall overview", body = serde_json::Value),
        (status = 400, description = "Unknown category", body = crate::models::ErrorResponse)
    )
)]
pub async fn company(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    answer(&state, &COMPANY_DESK, &payload)
}

/// General mall assistant
#[utoipa::path(
    post,
    path = "/assistant",
    params(
        ("query" = Option<String>, Query, description = "Free-text question"),
    ),
    responses(
        (status = 200, description = "Answer, or the help menu with found=false", body = serde_json::Value)
    )
)]
pub async fn assistant(
    State(state): State<AppState>,
    RawPayload(payload): RawPayload,
) -> ApiResult<Response> {
    answer(&state, &ASSISTANT, &payload)
}
