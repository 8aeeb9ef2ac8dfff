//! The update descriptor returned to the desktop client.

use serde::Serialize;

/// Payload served when the latest stable release carries a matching
/// binary/signature asset pair for the requesting platform.
///
/// Serialized as-is; the field names are the wire contract the desktop
/// updater consumes. Every field is populated on construction -- a partial
/// descriptor is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDescriptor {
    /// Download URL of the platform binary asset.
    pub url: String,
    /// Release tag, e.g. `v1.2.0`.
    pub version: String,
    /// Free-text release notes (empty when the release has no body).
    pub notes: String,
    /// Publish timestamp of the release, passed through verbatim.
    pub pub_date: String,
    /// Detached-signature contents for the binary asset. Forwarded opaquely;
    /// the client performs the cryptographic verification.
    pub signature: String,
}
