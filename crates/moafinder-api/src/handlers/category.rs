//! Category browse handlers

use axum::{
    extract::{Path, State},
    response::Response,
};
use moafinder_core::FieldExtractor;

use super::respond;
use crate::{payload::RawPayload, state::AppState};

/// Shops in a category; lists every category when no filter is given
#[utoipa::path(
    get,
    path = "/category",
    params(
        ("category" = Option<String>, Query, description = "Category filter, matched as a case-insensitive substring"),
    ),
    responses(
        (status = 200, description = "Matching shops, or the category list", body = serde_json::Value),
        (status = 404, description = "No shop in that category", body = serde_json::Value)
    )
)]
pub async fn browse(State(state): State<AppState>, RawPayload(payload): RawPayload) -> Response {
    let filter = FieldExtractor::field(&payload, "category")
        .unwrap_or_else(|| FieldExtractor::new().extract(&payload));
    respond(state.resolver.browse(Some(&filter)))
}

/// Shops in the category named in the path
#[utoipa::path(
    get,
    path = "/api/shops/category/{name}",
    params(("name" = String, Path, description = "Category filter")),
    responses(
        (status = 200, description = "Matching shops", body = serde_json::Value),
        (status = 404, description = "No shop in that category", body = serde_json::Value)
    )
)]
pub async fn browse_path(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    respond(state.resolver.browse(Some(&name)))
}
