//! End-to-end tests for the HTTP surface, driven through the router

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use moafinder_api::{routes, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    routes::app(AppState::mall_of_asia().unwrap())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_home_and_health() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "online");
    assert_eq!(body["total_shops"], 25);

    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_shops() {
    let (status, body) = get("/shops").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 25);
    assert_eq!(body["shops"]["uniqlo"]["category"], "Apparel / Fashion");
}

#[tokio::test]
async fn test_search_requires_a_name() {
    let (status, body) = post_json("/search", json!({ "shop": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a shop name");
    assert!(body["formatted_response"]
        .as_str()
        .unwrap()
        .starts_with("❌"));
}

#[tokio::test]
async fn test_search_single_match() {
    let (status, body) = get("/search?shop=UNIQLO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["type"], "shop_search");
    assert_eq!(body["shop"]["key"], "uniqlo");
    assert!(body["formatted_response"]
        .as_str()
        .unwrap()
        .contains("Uniqlo - SM Mall of Asia"));
}

#[tokio::test]
async fn test_search_via_alias_and_fallback_fields() {
    let (status, body) = post_json("/api/search", json!({ "message": "mcdo" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "mcdonald's");
}

#[tokio::test]
async fn test_search_single_fuzzy_match() {
    let (status, body) = get("/search?shop=shack").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["shop"]["key"], "shake shack");
    assert!(body.get("multiple_matches").is_none());
    assert!(body.get("shops").is_none());
}

#[tokio::test]
async fn test_search_multiple_matches() {
    let (status, body) = post_json("/search", json!({ "name": "muj" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["multiple_matches"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["shops"][0]["key"], "muji");
    assert_eq!(body["shops"][1]["key"], "muji cafe");
}

#[tokio::test]
async fn test_search_not_found() {
    let (status, body) = get("/search?shop=xyzzy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["found"], false);
    assert!(body["suggestion"].as_str().unwrap().contains("uniqlo"));
}

#[tokio::test]
async fn test_filler_words_are_stripped() {
    let (status, body) = get("/search?query=where%20is%20zara").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "zara");
}

#[tokio::test]
async fn test_text_plain_json_body_is_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/search")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"text":"Jollibee"}"#))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "jollibee");
}

#[tokio::test]
async fn test_malformed_body_falls_back_to_query_string() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/search?shop=zara")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "zara");
}

#[tokio::test]
async fn test_webhook_scans_unknown_fields() {
    let (status, body) = post_json(
        "/webhook",
        json!({ "session": { "id": 7 }, "utterance": "Starbucks" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "starbucks");

    let (status, body) = post_json("/webhook", json!({ "message": { "text": "imax" } })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "imax");
}

#[tokio::test]
async fn test_webhook_scan_prefers_body_over_query_params() {
    let (status, body) =
        post_json("/webhook?token=abc123", json!({ "utterance": "Starbucks" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "starbucks");

    let (status, body) = post_json("/search?shop=zara", json!({ "shop": "jollibee" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "jollibee");
}

#[tokio::test]
async fn test_webhook_without_text_is_rejected() {
    let (status, body) = post_json("/webhook", json!({ "session": { "id": 7 } })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a shop name");
}

#[tokio::test]
async fn test_categories() {
    let (status, body) = get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "category_browse");
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(body["count"], categories.len());
    assert!(categories.contains(&json!("Electronics")));

    let (status, body) = get("/category?category=food").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "food");
    assert_eq!(body["count"], 3);

    let (status, body) = get("/api/shops/category/electronics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = get("/category?category=spaceships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["found"], false);
}

#[tokio::test]
async fn test_popular() {
    let (status, body) = get("/popular").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "popular_picks");
    assert_eq!(body["count"], 10);
    assert!(body.get("multiple_matches").is_none());
}

#[tokio::test]
async fn test_structured_query() {
    let (status, body) = post_json("/query", json!({ "type": "popular" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "popular_picks");

    let (status, body) = post_json("/query", json!({ "type": "shop", "value": "h&m" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["key"], "h&m");

    let (status, body) =
        post_json("/query", json!({ "type": "category", "category": "food" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "category_browse");
    assert_eq!(body["category"], "food");
    assert_eq!(body["count"], 3);

    let (status, body) = post_json("/query", json!({ "type": "category" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], body["categories"].as_array().unwrap().len());

    let (status, body) = post_json("/query", json!({ "type": "weather" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["formatted_response"],
        "❌ Use type = shop | category | popular"
    );

    let (status, _) = post_json("/query", json!({ "type": "shop" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_traffic_desk() {
    let (status, body) = post_json("/traffic", json!({ "query": "how much is parking" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "parking_rates");

    let (status, body) = post_json("/traffic", json!({ "query": "Where can I park?" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "parking_locations");

    let (status, body) = get("/traffic?query=parking").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "parking_overview");
    assert_eq!(body["topics"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_traffic_topic_by_category() {
    let (status, body) = post_json("/traffic", json!({ "category": "parking_rates" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "parking_rates");

    let (status, _) = post_json("/traffic", json!({ "category": "helicopter" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_company_desk() {
    let (status, body) = get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["type"], "company_overview");

    let (status, body) = post_json("/company", json!({ "query": "fireworks tonight?" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "company_events");
    assert!(body["message"].as_str().unwrap().contains("Pyromusical"));
}

#[tokio::test]
async fn test_empty_assistant_question_returns_help() {
    let (status, body) = post_json("/assistant", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert_eq!(body["type"], "general_help");
    assert_eq!(body["message"], body["formatted_response"]);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Endpoint not found" }));
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/search").is_some());
}
