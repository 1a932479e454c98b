//! Service metadata and health check endpoints

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::{
    models::{HealthResponse, HomeResponse},
    state::AppState,
};

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /", "This welcome message"),
    ("GET /health", "Service health"),
    ("GET /shops", "All shops in the directory"),
    ("GET|POST /search", "Search for a shop (shop, name, query or text field)"),
    ("POST /webhook", "Search for a shop from any chatbot payload"),
    ("GET|POST /category", "Shops in a category, or every category when empty"),
    ("GET /categories", "Every shop category"),
    ("GET /api/shops/category/{name}", "Shops in a category"),
    ("GET|POST /popular", "Popular shops"),
    ("GET|POST /query", "Structured query with type=shop|category|popular and value"),
    ("GET|POST /traffic", "Parking, transport and traffic questions"),
    ("GET|POST /company", "Facts about the mall"),
    ("GET|POST /assistant", "General mall questions"),
];

/// Welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = HomeResponse)
    )
)]
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect::<BTreeMap<_, _>>();

    Json(HomeResponse {
        message: "Welcome to SM Mall of Asia Shop Finder API!".to_string(),
        status: "online".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
        total_shops: state.directory().len(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
    })
}
