//! Tolerant request payload extractor
//!
//! Chat platforms send the same request as query parameters, as a JSON body,
//! or as a JSON body with a `text/plain` (or missing) content type. This
//! extractor merges query parameters and any JSON object body into a single
//! [`Payload`]; body fields come first and win over query fields with the
//! same name. It never rejects a request.

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Query, Request},
};
use moafinder_core::{extract::payload_from_slice, Payload};
use serde_json::Value;

/// Merged query-string and body fields of a request
#[derive(Debug, Clone, Default)]
pub struct RawPayload(pub Payload);

#[async_trait]
impl<S> FromRequest<S> for RawPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<Vec<(String, String)>>::try_from_uri(req.uri()) {
            Ok(Query(params)) => params,
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring malformed query string");
                Vec::new()
            }
        };

        let mut payload = match Bytes::from_request(req, state).await {
            Ok(body) => payload_from_slice(&body),
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring unreadable request body");
                Payload::new()
            }
        };

        // body fields first; query params only fill the gaps
        for (key, value) in params {
            payload.entry(key).or_insert(Value::String(value));
        }

        Ok(RawPayload(payload))
    }
}
