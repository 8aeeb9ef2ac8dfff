use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use driftnote_github::GitHubApiError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// An upstream failure must surface as a server error, never as `204` --
/// clients treat `204` as an authoritative "no update".
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An upstream (GitHub) call failed; update availability is unknown.
    #[error("Upstream error: {0}")]
    Upstream(#[from] GitHubApiError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream release lookup failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Could not determine update availability".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
