//! Blob store namespaces and public URL composition.

use serde::{Deserialize, Serialize};

/// Logical prefix under which uploaded face images are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceNamespace {
    /// Faces with permanent access
    Authorized,
    /// Faces with time-limited access
    Temporary,
}

impl FaceNamespace {
    /// Bucket/prefix name used by the blob store.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceNamespace::Authorized => "authorized_faces",
            FaceNamespace::Temporary => "temporary_faces",
        }
    }
}

impl std::fmt::Display for FaceNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the public object URL for a stored blob.
///
/// Shared by the blob store handler and the classifier's image resolver so
/// both sides agree on the URL scheme.
pub fn public_object_url(public_base: &str, namespace: FaceNamespace, key: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        public_base.trim_end_matches('/'),
        namespace.as_str(),
        key
    )
}
