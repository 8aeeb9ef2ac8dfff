//! GitHub release lookup for the Driftnote update endpoint.
//!
//! [`api::GitHubApi`] talks to the GitHub REST API over HTTPS;
//! [`resolver::resolve_update`] turns a platform key plus the upstream
//! release list into an update offer (or "no update").

pub mod api;
pub mod models;
pub mod resolver;

pub use api::{GitHubApi, GitHubApiError};
pub use resolver::{resolve_update, ReleaseSource};
