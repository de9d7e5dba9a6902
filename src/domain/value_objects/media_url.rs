//! MediaUrl value object - an image reference tagged with where it came from
//!
//! Provenance is assigned when the URL is created. The only place a URL's
//! scheme is inspected is deserialization of persisted data, where a
//! local-scheme URL can only be a leftover from an earlier session.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scheme used by locally generated object URLs
pub const LOCAL_URL_SCHEME: &str = "blob:";

/// Origin of a media reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Durable URL from the upload service or persisted data
    Remote,
    /// Object URL minted by the asset manager during this editing session
    Session,
    /// Local URL loaded from persisted data; no longer resolvable
    Stale,
}

/// An image URL plus its provenance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaUrl {
    url: String,
    provenance: Provenance,
}

impl MediaUrl {
    /// A durable remote URL
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            provenance: Provenance::Remote,
        }
    }

    /// A session object URL. Only the asset manager should mint these.
    pub(crate) fn session(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            provenance: Provenance::Session,
        }
    }

    /// Classify a URL read back from persisted data
    pub fn from_persisted(url: impl Into<String>) -> Self {
        let url = url.into();
        let provenance = if url.trim_start().starts_with(LOCAL_URL_SCHEME) {
            Provenance::Stale
        } else {
            Provenance::Remote
        };
        Self { url, provenance }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// True for any locally generated reference, live or stale
    pub fn is_transient(&self) -> bool {
        matches!(self.provenance, Provenance::Session | Provenance::Stale)
    }

    /// True only for object URLs created in the current session
    pub fn is_session_preview(&self) -> bool {
        self.provenance == Provenance::Session
    }

    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

impl std::fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for MediaUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for MediaUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(MediaUrl::from_persisted(String::deserialize(deserializer)?))
    }
}
