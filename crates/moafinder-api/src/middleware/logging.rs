//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

/// Requests slower than this are logged as warnings
const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Logs every request with its route, status and latency
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "<unmatched>".to_owned());

    tracing::debug!(%method, %uri, "Request received");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status();
    let latency_ms = elapsed.as_secs_f64() * 1000.0;

    if elapsed > SLOW_REQUEST {
        tracing::warn!(%method, %uri, route = %route, latency_ms, "Slow request");
    }

    if status.is_server_error() {
        tracing::error!(%method, %uri, status = status.as_u16(), latency_ms, "Request failed");
    } else {
        tracing::info!(%method, route = %route, status = status.as_u16(), latency_ms, "Request served");
    }

    response
}
