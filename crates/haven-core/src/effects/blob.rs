//! Blob store effects.

use crate::blob::FaceNamespace;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for blob store operations.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum BlobError {
    /// Upload was rejected or did not complete
    #[error("upload failed for {namespace}/{key}: {message}")]
    Upload {
        /// Target namespace
        namespace: FaceNamespace,
        /// Target key
        key: String,
        /// Store-supplied reason
        message: String,
    },
}

/// Face image storage with public-URL resolution.
#[async_trait]
pub trait BlobStoreEffects: Send + Sync {
    /// Upload `bytes` under `key` in the given namespace.
    async fn upload(
        &self,
        namespace: FaceNamespace,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), BlobError>;

    /// Absolute public URL for a stored object.
    fn public_url(&self, namespace: FaceNamespace, key: &str) -> String;
}

#[async_trait]
impl<T: BlobStoreEffects + ?Sized> BlobStoreEffects for Arc<T> {
    async fn upload(
        &self,
        namespace: FaceNamespace,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), BlobError> {
        (**self).upload(namespace, key, bytes).await
    }

    fn public_url(&self, namespace: FaceNamespace, key: &str) -> String {
        (**self).public_url(namespace, key)
    }
}
