use std::sync::Arc;

use driftnote_github::ReleaseSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Upstream release source (the GitHub API in production, a canned
    /// stub in integration tests).
    pub releases: Arc<dyn ReleaseSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
