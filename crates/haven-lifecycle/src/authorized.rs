//! Authorized identity registry.

use crate::error::LifecycleError;
use haven_core::effects::{
    BlobStoreEffects, PhotoNormalizerEffects, PhysicalTimeEffects, RecordStoreEffects,
};
use haven_core::{
    AuthorizedIdentity, FaceNamespace, NewAuthorizedIdentity, PhotoSource, RecordId,
};
use std::sync::Arc;

/// Registers and removes permanently authorized identities.
///
/// These records carry no expiry and are only ever removed by explicit
/// operator action.
pub struct AuthorizedIdentityService {
    clock: Arc<dyn PhysicalTimeEffects>,
    store: Arc<dyn RecordStoreEffects>,
    blobs: Arc<dyn BlobStoreEffects>,
    photos: Arc<dyn PhotoNormalizerEffects>,
}

impl AuthorizedIdentityService {
    /// Create a registry over the given collaborators.
    pub fn new(
        clock: Arc<dyn PhysicalTimeEffects>,
        store: Arc<dyn RecordStoreEffects>,
        blobs: Arc<dyn BlobStoreEffects>,
        photos: Arc<dyn PhotoNormalizerEffects>,
    ) -> Self {
        Self {
            clock,
            store,
            blobs,
            photos,
        }
    }

    /// Register an authorized identity from an operator-supplied name and
    /// photo. Same pipeline as temporary creation, minus the expiry.
    pub async fn add(
        &self,
        name: &str,
        photo: Option<&PhotoSource>,
    ) -> Result<AuthorizedIdentity, LifecycleError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LifecycleError::EmptyName);
        }
        let photo = photo
            .filter(|p| !p.is_empty())
            .ok_or(LifecycleError::MissingPhoto)?;

        let normalized = self.photos.normalize(photo).await?;
        let now_ms = self.clock.now_ms().await?;

        let face_key = format!("{name}_{now_ms}.jpg");
        self.blobs
            .upload(FaceNamespace::Authorized, &face_key, normalized.bytes)
            .await?;

        let id = self
            .store
            .insert_authorized(NewAuthorizedIdentity {
                name: name.to_string(),
                face_key: face_key.clone(),
            })
            .await?;

        tracing::info!(%id, name, "authorized identity registered");

        Ok(AuthorizedIdentity {
            id,
            name: name.to_string(),
            face_key,
        })
    }

    /// All authorized identities, for selection before removal.
    pub async fn list(&self) -> Result<Vec<AuthorizedIdentity>, LifecycleError> {
        Ok(self.store.list_authorized().await?)
    }

    /// Remove one authorized identity by identifier.
    pub async fn remove(&self, id: RecordId) -> Result<(), LifecycleError> {
        self.store.delete_authorized(id).await?;
        tracing::info!(%id, "authorized identity removed");
        Ok(())
    }
}
