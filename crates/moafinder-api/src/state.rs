//! Shared handler state

use std::sync::Arc;

use moafinder_core::{Directory, Resolver};

use crate::error::ApiResult;

/// Resolver and uptime clock shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Stateless resolver over the shared shop directory
    pub resolver: Resolver,
    /// When the server started, for `/health`
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create state around an already built directory
    pub fn new(directory: Directory) -> Self {
        Self {
            resolver: Resolver::new(Arc::new(directory)),
            start_time: std::time::Instant::now(),
        }
    }

    /// State backed by the built-in SM Mall of Asia table
    pub fn mall_of_asia() -> ApiResult<Self> {
        Ok(Self::new(Directory::mall_of_asia()?))
    }

    /// The shop directory
    pub fn directory(&self) -> &Directory {
        self.resolver.directory()
    }

    /// Seconds since startup
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
