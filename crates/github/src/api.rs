//! REST client for the GitHub releases API.
//!
//! Wraps the two outbound calls the updater makes (listing releases,
//! downloading a signature asset) using [`reqwest`], with a bounded
//! per-request timeout and a single retry on transient failures.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::Release;
use crate::resolver::ReleaseSource;

/// Fixed upstream project whose releases feed the updater.
pub const GITHUB_REPO: &str = "driftnote-app/driftnote";

/// Base URL of the GitHub REST API.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Delay before the single retry of a failed upstream call.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// The GitHub API rejects requests without a `User-Agent` header.
const USER_AGENT: &str = concat!("driftnote-updater/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the upstream release host.
#[derive(Debug, thiserror::Error)]
pub enum GitHubApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// response body could not be read/decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Upstream returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl GitHubApiError {
    /// Whether a retry could plausibly succeed: transport failures and 5xx
    /// responses. Client errors (4xx) are not retried.
    fn is_transient(&self) -> bool {
        match self {
            GitHubApiError::Request(_) => true,
            GitHubApiError::HttpStatus { status, .. } => *status >= 500,
        }
    }
}

// ---------------------------------------------------------------------------
// GitHubApi
// ---------------------------------------------------------------------------

/// HTTP client for the upstream release host.
pub struct GitHubApi {
    client: reqwest::Client,
    base_url: String,
    repo: &'static str,
}

impl GitHubApi {
    /// Create a client against the public GitHub API.
    ///
    /// * `upstream_timeout` - per-request timeout applied to both the
    ///   release listing and the signature fetch.
    pub fn new(upstream_timeout: Duration) -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string(), upstream_timeout)
    }

    /// Create a client against a non-default base URL.
    pub fn with_base_url(base_url: String, upstream_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(upstream_timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self {
            client,
            base_url,
            repo: GITHUB_REPO,
        }
    }

    // ---- private helpers ----

    /// Execute a GET, retrying once after a short delay if the first
    /// attempt fails transiently.
    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, GitHubApiError> {
        match self.try_get(url).await {
            Err(e) if e.is_transient() => {
                tracing::warn!(url, error = %e, "Upstream request failed, retrying once");
                tokio::time::sleep(RETRY_DELAY).await;
                self.try_get(url).await
            }
            other => other,
        }
    }

    /// Execute a single GET and ensure a success status code.
    async fn try_get(&self, url: &str) -> Result<reqwest::Response, GitHubApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GitHubApiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ReleaseSource for GitHubApi {
    /// Fetch the first page of releases for the configured project.
    ///
    /// Unauthenticated; the API returns releases newest first.
    async fn list_releases(&self) -> Result<Vec<Release>, GitHubApiError> {
        let url = format!("{}/repos/{}/releases", self.base_url, self.repo);
        let response = self.get_with_retry(&url).await?;
        Ok(response.json::<Vec<Release>>().await?)
    }

    /// Fetch a small text resource (a detached signature) as a string.
    ///
    /// The whole body is the result; no parsing or trimming.
    async fn fetch_text(&self, url: &str) -> Result<String, GitHubApiError> {
        let response = self.get_with_retry(url).await?;
        Ok(response.text().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
