//! In-memory record store handler for testing and headless runs.

use async_trait::async_trait;
use haven_core::effects::{RecordStoreEffects, StoreError};
use haven_core::{
    AuthorizedIdentity, DeviceState, NewAuthorizedIdentity, NewTemporaryIdentity, RecordId,
    TemporaryIdentity,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    next_id: u64,
    temporaries: BTreeMap<RecordId, TemporaryIdentity>,
    authorized: BTreeMap<RecordId, AuthorizedIdentity>,
    device_state: Option<DeviceState>,
}

impl Tables {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId(self.next_id)
    }
}

/// In-memory record store.
///
/// Serializes conflicting writes behind an async lock, matching the
/// contract the services assume of the real store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStoreEffects for MemoryRecordStore {
    async fn insert_temporary(
        &self,
        record: NewTemporaryIdentity,
    ) -> Result<RecordId, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_id();
        tables.temporaries.insert(
            id,
            TemporaryIdentity {
                id,
                name: record.name,
                face_key: record.face_key,
                expires_at_ms: record.expires_at_ms,
            },
        );
        Ok(id)
    }

    async fn list_temporaries(&self) -> Result<Vec<TemporaryIdentity>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.temporaries.values().cloned().collect())
    }

    async fn expired_temporaries(
        &self,
        now_ms: u64,
    ) -> Result<Vec<TemporaryIdentity>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .temporaries
            .values()
            .filter(|t| t.expires_at_ms < now_ms)
            .cloned()
            .collect())
    }

    async fn delete_temporaries(&self, ids: &[RecordId]) -> Result<usize, StoreError> {
        let mut tables = self.tables.write().await;
        let mut removed = 0;
        for id in ids {
            if tables.temporaries.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn insert_authorized(
        &self,
        record: NewAuthorizedIdentity,
    ) -> Result<RecordId, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_id();
        tables.authorized.insert(
            id,
            AuthorizedIdentity {
                id,
                name: record.name,
                face_key: record.face_key,
            },
        );
        Ok(id)
    }

    async fn list_authorized(&self) -> Result<Vec<AuthorizedIdentity>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.authorized.values().cloned().collect())
    }

    async fn delete_authorized(&self, id: RecordId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.authorized.remove(&id).is_none() {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn device_state(&self) -> Result<Option<DeviceState>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.device_state)
    }

    async fn upsert_device_state(&self, state: DeviceState) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.device_state = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp(name: &str, expires_at_ms: u64) -> NewTemporaryIdentity {
        NewTemporaryIdentity {
            name: name.to_string(),
            face_key: format!("{name}.jpg"),
            expires_at_ms,
        }
    }

    #[tokio::test]
    async fn expired_query_uses_strict_less_than() {
        let store = MemoryRecordStore::new();
        store.insert_temporary(temp("early", 999)).await.unwrap();
        store.insert_temporary(temp("exact", 1000)).await.unwrap();
        store.insert_temporary(temp("late", 1001)).await.unwrap();

        let expired = store.expired_temporaries(1000).await.unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "early");
    }

    #[tokio::test]
    async fn delete_counts_only_existing_rows() {
        let store = MemoryRecordStore::new();
        let id = store.insert_temporary(temp("a", 1)).await.unwrap();
        let removed = store
            .delete_temporaries(&[id, RecordId(999)])
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert!(store.list_temporaries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn device_mirror_upserts_over_previous_state() {
        use haven_core::DeviceStatus;

        let store = MemoryRecordStore::new();
        assert_eq!(store.device_state().await.unwrap(), None);

        store
            .upsert_device_state(DeviceState {
                status: DeviceStatus::On,
            })
            .await
            .unwrap();
        store
            .upsert_device_state(DeviceState {
                status: DeviceStatus::Off,
            })
            .await
            .unwrap();

        let state = store.device_state().await.unwrap().unwrap();
        assert_eq!(state.status, DeviceStatus::Off);
    }
}
