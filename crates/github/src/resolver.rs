//! Update resolution: select the release and asset pair for a platform.
//!
//! The resolver is a stateless read-through of upstream state. Each call
//! makes at most two sequential upstream requests (release listing, then
//! signature fetch) and either produces a complete
//! [`UpdateDescriptor`] or reports "no update".

use async_trait::async_trait;

use driftnote_core::platform::{platform_suffix, SIGNATURE_EXTENSION};
use driftnote_core::update::UpdateDescriptor;

use crate::api::GitHubApiError;
use crate::models::{Asset, Release};

/// Outbound capabilities the resolver needs: list the project's releases
/// and download a small text asset.
///
/// Implemented by [`GitHubApi`](crate::api::GitHubApi) in production and by
/// canned stubs in tests.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// First page of the project's releases, newest first.
    async fn list_releases(&self) -> Result<Vec<Release>, GitHubApiError>;

    /// Raw text body of an asset download URL.
    async fn fetch_text(&self, url: &str) -> Result<String, GitHubApiError>;
}

/// Resolve the update offer for a platform key.
///
/// Returns `Ok(None)` when the platform key is unknown, no stable release
/// exists, or the latest stable release lacks the binary/signature asset
/// pair. The platform check runs first, so unknown keys make no upstream
/// calls at all.
///
/// The client's architecture and current version deliberately play no part:
/// the endpoint always offers the latest stable release and leaves the
/// "is this newer" comparison to the client.
pub async fn resolve_update(
    source: &dyn ReleaseSource,
    target: &str,
) -> Result<Option<UpdateDescriptor>, GitHubApiError> {
    let Some(suffix) = platform_suffix(target) else {
        return Ok(None);
    };

    let releases = source.list_releases().await?;
    let Some(release) = latest_stable(&releases) else {
        return Ok(None);
    };

    let signature_suffix = format!("{suffix}{SIGNATURE_EXTENSION}");
    let (Some(binary), Some(signature_asset)) = (
        asset_with_suffix(release, suffix),
        asset_with_suffix(release, &signature_suffix),
    ) else {
        return Ok(None);
    };

    let signature = source
        .fetch_text(&signature_asset.browser_download_url)
        .await?;

    Ok(Some(UpdateDescriptor {
        url: binary.browser_download_url.clone(),
        version: release.tag_name.clone(),
        notes: release.body.clone().unwrap_or_default(),
        pub_date: release.published_at.clone().unwrap_or_default(),
        signature,
    }))
}

/// First release that is neither a draft nor a prerelease.
///
/// Trusts upstream ordering (newest first); no independent sort.
fn latest_stable(releases: &[Release]) -> Option<&Release> {
    releases.iter().find(|r| !r.draft && !r.prerelease)
}

/// First asset whose file name ends with `suffix`.
fn asset_with_suffix<'a>(release: &'a Release, suffix: &str) -> Option<&'a Asset> {
    release.assets.iter().find(|a| a.name.ends_with(suffix))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
