//! Shared helpers for integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) on top of a canned release source, and drives it with
//! `tower::ServiceExt::oneshot`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use driftnote_api::config::ServerConfig;
use driftnote_api::router::build_app_router;
use driftnote_api::state::AppState;
use driftnote_github::models::{Asset, Release};
use driftnote_github::{GitHubApiError, ReleaseSource};

/// Canned release source with upstream-call counters.
pub struct StubReleaseSource {
    pub releases: Vec<Release>,
    pub signature: String,
    pub fail_listing: bool,
    pub fail_signature: bool,
    pub list_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl StubReleaseSource {
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            releases,
            signature: "dW50cnVzdGVkIGNvbW1lbnQ6IHNpZ25hdHVyZQo=".to_string(),
            fail_listing: false,
            fail_signature: false,
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Total outbound calls the app made against this source.
    pub fn upstream_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseSource for StubReleaseSource {
    async fn list_releases(&self) -> Result<Vec<Release>, GitHubApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(GitHubApiError::HttpStatus {
                status: 500,
                body: "upstream down".to_string(),
            });
        }
        Ok(self.releases.clone())
    }

    async fn fetch_text(&self, _url: &str) -> Result<String, GitHubApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_signature {
            return Err(GitHubApiError::HttpStatus {
                status: 502,
                body: "cdn error".to_string(),
            });
        }
        Ok(self.signature.clone())
    }
}

/// Build an asset with a download URL derived from its name.
pub fn asset(name: &str) -> Asset {
    Asset {
        name: name.to_string(),
        browser_download_url: format!("https://downloads.test/{name}"),
        content_type: "application/octet-stream".to_string(),
        size: 1024,
    }
}

/// Build a release entry with canned notes and publish date.
pub fn release(id: u64, tag: &str, draft: bool, prerelease: bool, assets: Vec<Asset>) -> Release {
    Release {
        id,
        tag_name: tag.to_string(),
        draft,
        prerelease,
        published_at: Some("2025-11-02T09:14:00Z".to_string()),
        body: Some(format!("Notes for {tag}")),
        assets,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        upstream_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given release source.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(source: Arc<dyn ReleaseSource>) -> Router {
    let config = test_config();
    let state = AppState {
        releases: source,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
