//! Temporary access lifecycle manager.

use crate::error::LifecycleError;
use haven_core::effects::{
    BlobStoreEffects, PhotoNormalizerEffects, PhysicalTimeEffects, RecordStoreEffects,
};
use haven_core::{FaceNamespace, NewTemporaryIdentity, PhotoSource, RecordId, TemporaryIdentity};
use std::sync::Arc;
use std::time::Duration;

const MS_PER_MINUTE: u64 = 60_000;

/// Configuration for the lifecycle manager.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Duration granted when a create request does not supply one, in minutes
    pub default_duration_minutes: u32,
    /// Interval between sweep ticks
    pub sweep_interval: Duration,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: 30,
            sweep_interval: Duration::from_secs(60),
        }
    }
}

/// Request to grant time-limited access to a face/name pair.
#[derive(Debug, Clone)]
pub struct CreateTemporaryIdentity {
    /// Operator-supplied name; trimmed before use, must be non-empty
    pub name: String,
    /// Operator-selected photo; required
    pub photo: Option<PhotoSource>,
    /// Access duration in minutes; `None` uses the configured default
    pub duration_minutes: Option<u32>,
}

/// Owns creation of temporary identity records and the recurring sweep
/// that revokes access once time elapses.
pub struct TemporaryAccessManager {
    clock: Arc<dyn PhysicalTimeEffects>,
    store: Arc<dyn RecordStoreEffects>,
    blobs: Arc<dyn BlobStoreEffects>,
    photos: Arc<dyn PhotoNormalizerEffects>,
    config: LifecycleConfig,
}

impl TemporaryAccessManager {
    /// Create a manager over the given collaborators.
    pub fn new(
        clock: Arc<dyn PhysicalTimeEffects>,
        store: Arc<dyn RecordStoreEffects>,
        blobs: Arc<dyn BlobStoreEffects>,
        photos: Arc<dyn PhotoNormalizerEffects>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            clock,
            store,
            blobs,
            photos,
            config,
        }
    }

    /// Sweep interval this manager was configured with.
    pub fn sweep_interval(&self) -> Duration {
        self.config.sweep_interval
    }

    /// Grant temporary access: normalize and upload the photo, then insert a
    /// record expiring `duration_minutes` from now.
    ///
    /// Validation failures are rejected before any side effect. A successful
    /// upload is not rolled back if the subsequent insert fails; the orphaned
    /// blob has no record pointing at it and is never queried.
    pub async fn create(
        &self,
        request: CreateTemporaryIdentity,
    ) -> Result<TemporaryIdentity, LifecycleError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(LifecycleError::EmptyName);
        }
        let photo = request
            .photo
            .as_ref()
            .filter(|p| !p.is_empty())
            .ok_or(LifecycleError::MissingPhoto)?;

        let normalized = self.photos.normalize(photo).await?;
        let now_ms = self.clock.now_ms().await?;

        let face_key = format!("{name}_{now_ms}.jpg");
        self.blobs
            .upload(FaceNamespace::Temporary, &face_key, normalized.bytes)
            .await?;

        let duration_minutes = request
            .duration_minutes
            .unwrap_or(self.config.default_duration_minutes);
        let expires_at_ms = now_ms + u64::from(duration_minutes) * MS_PER_MINUTE;

        let id = self
            .store
            .insert_temporary(NewTemporaryIdentity {
                name: name.to_string(),
                face_key: face_key.clone(),
                expires_at_ms,
            })
            .await?;

        tracing::info!(%id, name, duration_minutes, "temporary identity created");

        Ok(TemporaryIdentity {
            id,
            name: name.to_string(),
            face_key,
            expires_at_ms,
        })
    }

    /// Remove every temporary identity whose expiry has strictly passed,
    /// returning the number of records removed.
    ///
    /// Idempotent: with no newly-expired records this is a no-op. A record
    /// expiring at exactly `now` survives one more cycle (strict less-than).
    pub async fn sweep(&self) -> Result<usize, LifecycleError> {
        let now_ms = self.clock.now_ms().await?;
        let expired = self.store.expired_temporaries(now_ms).await?;
        if expired.is_empty() {
            return Ok(0);
        }

        let ids: Vec<RecordId> = expired.iter().map(|t| t.id).collect();
        let removed = self.store.delete_temporaries(&ids).await?;
        tracing::info!(removed, "expired temporary identities revoked");
        Ok(removed)
    }
}
