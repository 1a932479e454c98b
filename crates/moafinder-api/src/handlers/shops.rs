//! Directory dump and popular picks

use axum::{extract::State, response::Response, Json};
use serde_json::json;

use super::respond;
use crate::{models::DirectoryResponse, state::AppState};

/// List every shop
#[utoipa::path(
    get,
    path = "/shops",
    responses(
        (status = 200, description = "Every shop keyed by lookup key", body = DirectoryResponse)
    )
)]
pub async fn list_shops(State(state): State<AppState>) -> Json<DirectoryResponse> {
    let directory = state.directory();
    let shops = directory
        .iter()
        .map(|(key, record)| (key.to_string(), json!(record)))
        .collect();

    Json(DirectoryResponse {
        total: directory.len(),
        shops,
    })
}

/// Curated popular shops; any `value` a caller sends is ignored
#[utoipa::path(
    get,
    path = "/popular",
    responses(
        (status = 200, description = "Popular shops", body = serde_json::Value)
    )
)]
pub async fn popular(State(state): State<AppState>) -> Response {
    respond(state.resolver.popular())
}
