//! API response models with fixed shapes
//!
//! Query answers use the dynamic envelope built by
//! `moafinder_core::format::envelope`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service metadata returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    /// Welcome message
    pub message: String,
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Endpoint summary
    pub endpoints: BTreeMap<String, String>,
    /// Number of shops in the directory
    pub total_shops: usize,
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

/// Full directory dump, keyed by shop key in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectoryResponse {
    /// Number of shops
    pub total: usize,
    /// Shop records by key
    #[schema(value_type = Object)]
    pub shops: serde_json::Map<String, serde_json::Value>,
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Decorated hint for chat clients
    pub formatted_response: Option<String>,
}
