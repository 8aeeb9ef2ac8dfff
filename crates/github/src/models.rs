//! Wire models for the GitHub releases REST API.
//!
//! Only the fields the resolver reads are deserialized; the API returns
//! many more. Schema reference:
//! <https://docs.github.com/en/rest/releases/releases>

use serde::Deserialize;

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// File name; platform matching is done by suffix against this.
    pub name: String,
    /// Direct download URL for the asset contents.
    pub browser_download_url: String,
    /// MIME type reported at upload time.
    pub content_type: String,
    /// Asset size in bytes.
    pub size: u64,
}

/// One entry from the project's releases list.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    /// Tag the release was cut from, e.g. `v1.2.0`.
    pub tag_name: String,
    pub draft: bool,
    pub prerelease: bool,
    /// `null` for drafts, which never qualify for an update.
    pub published_at: Option<String>,
    /// Release notes; `null` when published without a body.
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}
