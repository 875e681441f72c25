//! In-memory blob store handler.

use async_trait::async_trait;
use haven_core::effects::{BlobError, BlobStoreEffects};
use haven_core::{public_object_url, FaceNamespace};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory blob store for testing and headless runs.
///
/// Resolves public URLs with the same composition rule the production
/// store uses, against a configurable base address.
#[derive(Debug, Clone)]
pub struct MemoryBlobStore {
    public_base: String,
    objects: Arc<RwLock<HashMap<(FaceNamespace, String), Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Create an empty blob store serving URLs under `public_base`.
    pub fn new(public_base: impl Into<String>) -> Self {
        Self {
            public_base: public_base.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stored bytes for an object, if present.
    pub async fn get(&self, namespace: FaceNamespace, key: &str) -> Option<Vec<u8>> {
        let objects = self.objects.read().await;
        objects.get(&(namespace, key.to_string())).cloned()
    }

    /// Number of stored objects across all namespaces.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Whether the store holds no objects.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStoreEffects for MemoryBlobStore {
    async fn upload(
        &self,
        namespace: FaceNamespace,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), BlobError> {
        let mut objects = self.objects.write().await;
        objects.insert((namespace, key.to_string()), bytes);
        Ok(())
    }

    fn public_url(&self, namespace: FaceNamespace, key: &str) -> String {
        public_object_url(&self.public_base, namespace, key)
    }
}
