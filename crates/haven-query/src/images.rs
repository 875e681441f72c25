//! Image reference resolution.

use haven_core::{public_object_url, FaceNamespace};
use serde::{Deserialize, Serialize};

/// Where a display entry's face image comes from.
///
/// Tracked per entry so one broken reference never blocks rendering of the
/// rest of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// No usable reference; render the fallback placeholder asset
    Placeholder,
    /// Absolute address to fetch
    Remote(String),
}

impl ImageSource {
    /// Resolved URL, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Placeholder => None,
            ImageSource::Remote(url) => Some(url),
        }
    }
}

/// Multi-rule URL construction policy for observation image references.
#[derive(Debug, Clone)]
pub struct ImageUrlResolver {
    public_base: String,
}

impl ImageUrlResolver {
    /// Create a resolver composing relative keys against `public_base`.
    pub fn new(public_base: impl Into<String>) -> Self {
        Self {
            public_base: public_base.into(),
        }
    }

    /// Resolve one image reference:
    ///
    /// 1. absent/empty → placeholder
    /// 2. already absolute (recognized scheme prefix) → used verbatim
    /// 3. otherwise → composed against the authorized-faces public base path
    pub fn resolve(&self, reference: Option<&str>) -> ImageSource {
        match reference {
            None | Some("") => ImageSource::Placeholder,
            Some(url) if url.starts_with("http") => ImageSource::Remote(url.to_string()),
            Some(key) => ImageSource::Remote(public_object_url(
                &self.public_base,
                FaceNamespace::Authorized,
                key,
            )),
        }
    }
}
