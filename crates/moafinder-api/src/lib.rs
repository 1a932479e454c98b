#![warn(missing_docs)]

//! MOA Finder HTTP API
//!
//! Exposes the shop directory and the mall Q&A resolver to chat widgets.
//! Every endpoint accepts query parameters and a JSON body alike, and answers
//! with both structured JSON and a pre-formatted display string.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod payload;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigLoader, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
pub use state::AppState;
