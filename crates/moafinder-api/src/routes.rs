//! API route definitions

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use utoipa::OpenApi;

use crate::{
    handlers::{self, category, desk, health, query, search, shops},
    middleware::{handle_panic, logging_middleware},
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Metadata
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        // Directory
        .route("/shops", get(shops::list_shops))
        .route("/api/shops", get(shops::list_shops))
        // Shop search
        .route("/search", get(search::search).post(search::search))
        .route("/api/search", get(search::search).post(search::search))
        .route("/api/shops/search", get(search::search).post(search::search))
        .route("/webhook", get(search::webhook).post(search::webhook))
        .route("/api/webhook", post(search::webhook))
        // Categories
        .route("/category", get(category::browse).post(category::browse))
        .route("/categories", get(category::browse).post(category::browse))
        .route("/api/shops/category/:name", get(category::browse_path))
        // Popular and structured queries
        .route("/popular", get(shops::popular).post(shops::popular))
        .route("/query", get(query::structured).post(query::structured))
        // Q&A desks
        .route("/traffic", get(desk::traffic).post(desk::traffic))
        .route("/company", get(desk::company).post(desk::company))
        .route("/about", get(desk::company).post(desk::company))
        .route("/info", get(desk::company).post(desk::company))
        .route("/assistant", get(desk::assistant).post(desk::assistant))
        .route("/ask", get(desk::assistant).post(desk::assistant))
        .route("/ai", get(desk::assistant).post(desk::assistant))
}

/// OpenAPI document route
pub fn docs_routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

/// Combined routes with fallback and middleware, ready to serve
pub fn app(state: AppState) -> Router {
    api_routes()
        .merge(docs_routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::home,
        health::health_check,
        shops::list_shops,
        shops::popular,
        search::search,
        search::webhook,
        category::browse,
        category::browse_path,
        query::structured,
        desk::traffic,
        desk::company,
        desk::assistant,
    ),
    components(schemas(
        crate::models::HomeResponse,
        crate::models::HealthResponse,
        crate::models::DirectoryResponse,
        crate::models::ErrorResponse,
    )),
    info(
        title = "MOA Finder API",
        version = "1.0.0",
        description = "Shop search, categories, parking and mall Q&A for SM Mall of Asia chat widgets"
    )
)]
struct ApiDoc;
