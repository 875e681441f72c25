//! Sweeper task scheduling tests, driven on paused tokio time.

use haven_core::effects::RecordStoreEffects;
use haven_core::PhotoSource;
use haven_effects::{MemoryBlobStore, MemoryRecordStore, PassthroughNormalizer, SimulatedClock};
use haven_lifecycle::{CreateTemporaryIdentity, LifecycleConfig, TemporaryAccessManager};
use std::sync::Arc;
use std::time::Duration;

const START_MS: u64 = 1_700_000_000_000;
const MINUTE_MS: u64 = 60_000;

fn paused_fixture() -> (SimulatedClock, MemoryRecordStore, Arc<TemporaryAccessManager>) {
    let clock = SimulatedClock::new(START_MS);
    let store = MemoryRecordStore::new();
    let manager = Arc::new(TemporaryAccessManager::new(
        Arc::new(clock.clone()),
        Arc::new(store.clone()),
        Arc::new(MemoryBlobStore::new("https://blobs.local")),
        Arc::new(PassthroughNormalizer::new()),
        LifecycleConfig::default(),
    ));
    (clock, store, manager)
}

async fn drain_tasks() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn sweeper_revokes_expired_identity_on_its_tick() {
    let (clock, store, manager) = paused_fixture();

    manager
        .create(CreateTemporaryIdentity {
            name: "Bob".to_string(),
            photo: Some(PhotoSource { bytes: vec![1] }),
            duration_minutes: Some(1),
        })
        .await
        .unwrap();

    let handle = manager.start_sweeper();
    drain_tasks().await;

    // Expire the record, then let one interval elapse.
    clock.advance_ms(2 * MINUTE_MS);
    tokio::time::advance(Duration::from_secs(61)).await;
    drain_tasks().await;

    assert!(store.list_temporaries().await.unwrap().is_empty());
    handle.stopped().await;
}

#[tokio::test(start_paused = true)]
async fn no_sweep_runs_before_the_first_interval() {
    let (clock, store, manager) = paused_fixture();

    manager
        .create(CreateTemporaryIdentity {
            name: "Ana".to_string(),
            photo: Some(PhotoSource { bytes: vec![1] }),
            duration_minutes: Some(1),
        })
        .await
        .unwrap();
    clock.advance_ms(2 * MINUTE_MS);

    let handle = manager.start_sweeper();
    // Well inside the first interval: the expired record must still be there.
    tokio::time::advance(Duration::from_secs(30)).await;
    drain_tasks().await;
    assert_eq!(store.list_temporaries().await.unwrap().len(), 1);

    handle.stopped().await;
}

#[tokio::test(start_paused = true)]
async fn stopped_sweeper_runs_no_further_ticks() {
    let (clock, store, manager) = paused_fixture();

    let handle = manager.start_sweeper();
    drain_tasks().await;
    handle.stopped().await;

    manager
        .create(CreateTemporaryIdentity {
            name: "Bob".to_string(),
            photo: Some(PhotoSource { bytes: vec![1] }),
            duration_minutes: Some(1),
        })
        .await
        .unwrap();
    clock.advance_ms(5 * MINUTE_MS);

    // Several intervals pass after teardown; nothing sweeps.
    tokio::time::advance(Duration::from_secs(300)).await;
    drain_tasks().await;
    assert_eq!(store.list_temporaries().await.unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_schedule() {
    let (clock, store, manager) = paused_fixture();

    manager
        .create(CreateTemporaryIdentity {
            name: "Bob".to_string(),
            photo: Some(PhotoSource { bytes: vec![1] }),
            duration_minutes: Some(1),
        })
        .await
        .unwrap();

    let handle = manager.start_sweeper();
    drain_tasks().await;
    drop(handle);
    drain_tasks().await;

    clock.advance_ms(5 * MINUTE_MS);
    tokio::time::advance(Duration::from_secs(300)).await;
    drain_tasks().await;
    assert_eq!(store.list_temporaries().await.unwrap().len(), 1);
}
