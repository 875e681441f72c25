//! Record store effects.
//!
//! Typed per-table operations over the three tables Haven touches:
//! temporary identities (with expiry), authorized identities, and the
//! device-state mirror. The store is assumed to serialize conflicting
//! writes; no locking is layered on top here.

use crate::device::DeviceState;
use crate::identity::{
    AuthorizedIdentity, NewAuthorizedIdentity, NewTemporaryIdentity, RecordId, TemporaryIdentity,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for record store operations.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum StoreError {
    /// Insert failed
    #[error("insert failed: {message}")]
    Insert {
        /// Store-supplied reason
        message: String,
    },
    /// Select failed
    #[error("select failed: {message}")]
    Select {
        /// Store-supplied reason
        message: String,
    },
    /// Delete failed
    #[error("delete failed: {message}")]
    Delete {
        /// Store-supplied reason
        message: String,
    },
    /// Upsert failed
    #[error("upsert failed: {message}")]
    Upsert {
        /// Store-supplied reason
        message: String,
    },
    /// Referenced record does not exist
    #[error("record not found: {id}")]
    NotFound {
        /// Missing record identifier
        id: RecordId,
    },
}

/// Record store operations used by the lifecycle manager and device service.
#[async_trait]
pub trait RecordStoreEffects: Send + Sync {
    /// Insert a temporary identity, returning its assigned id.
    async fn insert_temporary(&self, record: NewTemporaryIdentity)
        -> Result<RecordId, StoreError>;

    /// All temporary identities, in insertion order.
    async fn list_temporaries(&self) -> Result<Vec<TemporaryIdentity>, StoreError>;

    /// Temporary identities whose expiry has strictly passed (`expires_at < now`).
    async fn expired_temporaries(&self, now_ms: u64)
        -> Result<Vec<TemporaryIdentity>, StoreError>;

    /// Batch-delete temporary identities by id, returning the number removed.
    async fn delete_temporaries(&self, ids: &[RecordId]) -> Result<usize, StoreError>;

    /// Insert an authorized identity, returning its assigned id.
    async fn insert_authorized(
        &self,
        record: NewAuthorizedIdentity,
    ) -> Result<RecordId, StoreError>;

    /// All authorized identities, in insertion order.
    async fn list_authorized(&self) -> Result<Vec<AuthorizedIdentity>, StoreError>;

    /// Delete one authorized identity by id.
    async fn delete_authorized(&self, id: RecordId) -> Result<(), StoreError>;

    /// Last-known device state, if any has been recorded.
    async fn device_state(&self) -> Result<Option<DeviceState>, StoreError>;

    /// Overwrite the device-state mirror row.
    async fn upsert_device_state(&self, state: DeviceState) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: RecordStoreEffects + ?Sized> RecordStoreEffects for Arc<T> {
    async fn insert_temporary(
        &self,
        record: NewTemporaryIdentity,
    ) -> Result<RecordId, StoreError> {
        (**self).insert_temporary(record).await
    }

    async fn list_temporaries(&self) -> Result<Vec<TemporaryIdentity>, StoreError> {
        (**self).list_temporaries().await
    }

    async fn expired_temporaries(
        &self,
        now_ms: u64,
    ) -> Result<Vec<TemporaryIdentity>, StoreError> {
        (**self).expired_temporaries(now_ms).await
    }

    async fn delete_temporaries(&self, ids: &[RecordId]) -> Result<usize, StoreError> {
        (**self).delete_temporaries(ids).await
    }

    async fn insert_authorized(
        &self,
        record: NewAuthorizedIdentity,
    ) -> Result<RecordId, StoreError> {
        (**self).insert_authorized(record).await
    }

    async fn list_authorized(&self) -> Result<Vec<AuthorizedIdentity>, StoreError> {
        (**self).list_authorized().await
    }

    async fn delete_authorized(&self, id: RecordId) -> Result<(), StoreError> {
        (**self).delete_authorized(id).await
    }

    async fn device_state(&self) -> Result<Option<DeviceState>, StoreError> {
        (**self).device_state().await
    }

    async fn upsert_device_state(&self, state: DeviceState) -> Result<(), StoreError> {
        (**self).upsert_device_state(state).await
    }
}
