//! The update-check endpoint consumed by the desktop client.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};

use driftnote_github::resolve_update;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /update/{target}/{arch}/{current_version} -- check for an update.
///
/// Responds `200` with an update descriptor, or `204 No Content` when the
/// platform key is unknown or no stable release carries the expected asset
/// pair. `arch` and `current_version` are recorded in the trace but do not
/// affect selection: the endpoint always offers the latest stable release
/// and leaves the version comparison to the client.
async fn check_update(
    State(state): State<AppState>,
    Path((target, arch, current_version)): Path<(String, String, String)>,
) -> AppResult<Response> {
    tracing::debug!(%target, %arch, %current_version, "Update check");

    match resolve_update(state.releases.as_ref(), &target).await? {
        Some(descriptor) => Ok((StatusCode::OK, Json(descriptor)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Mount the update-check route. Root-level: the path shape is the public
/// contract baked into the desktop client's updater configuration.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/update/{target}/{arch}/{current_version}",
        get(check_update),
    )
}
