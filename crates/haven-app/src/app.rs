//! Application wiring.

use crate::config::AppConfig;
use crate::device::DeviceService;
use haven_core::effects::{
    BlobStoreEffects, PhotoNormalizerEffects, PhysicalTimeEffects, RecordStoreEffects,
};
use haven_effects::{
    HttpDeviceActuator, HttpQueryInterpreter, MemoryBlobStore, MemoryRecordStore,
    PassthroughNormalizer, RecordingActuator, ScriptedInterpreter, SimulatedClock, SystemClock,
};
use haven_lifecycle::{AuthorizedIdentityService, TemporaryAccessManager};
use haven_query::{ImageUrlResolver, QueryClassifier};
use std::sync::Arc;

/// Composed Haven services sharing one set of effect handlers.
pub struct HavenApp {
    /// Temporary-access lifecycle manager; call `start_sweeper` on it to
    /// begin the recurring revocation sweep
    pub temporary: Arc<TemporaryAccessManager>,
    /// Authorized identity registry
    pub authorized: AuthorizedIdentityService,
    /// Natural-language query classifier
    pub queries: QueryClassifier,
    /// Lock/LED device service
    pub device: DeviceService,
}

/// Handles into the substituted collaborators of a testing app.
pub struct TestHandles {
    /// Simulated clock; advance it to expire identities
    pub clock: SimulatedClock,
    /// Shared in-memory record store
    pub store: MemoryRecordStore,
    /// Shared in-memory blob store
    pub blobs: MemoryBlobStore,
    /// Scripted query interpreter
    pub interpreter: ScriptedInterpreter,
    /// Recording device actuator
    pub actuator: RecordingActuator,
}

impl HavenApp {
    /// Production wiring: HTTP interpreter and actuator clients built from
    /// `config`, system clock, and caller-supplied store/blob/photo handlers
    /// for the hosted collaborators.
    pub fn new(
        config: &AppConfig,
        store: Arc<dyn RecordStoreEffects>,
        blobs: Arc<dyn BlobStoreEffects>,
        photos: Arc<dyn PhotoNormalizerEffects>,
    ) -> Self {
        let clock: Arc<dyn PhysicalTimeEffects> = Arc::new(SystemClock::new());
        let interpreter = Arc::new(HttpQueryInterpreter::new(config.interpreter_url.clone()));
        let actuator = Arc::new(HttpDeviceActuator::new(config.actuator_url.clone()));

        Self {
            temporary: Arc::new(TemporaryAccessManager::new(
                Arc::clone(&clock),
                Arc::clone(&store),
                Arc::clone(&blobs),
                Arc::clone(&photos),
                config.lifecycle(),
            )),
            authorized: AuthorizedIdentityService::new(
                Arc::clone(&clock),
                Arc::clone(&store),
                blobs,
                photos,
            ),
            queries: QueryClassifier::new(
                interpreter,
                ImageUrlResolver::new(config.blob_public_base.clone()),
            ),
            device: DeviceService::new(actuator, store),
        }
    }

    /// Testing wiring: in-memory stores, simulated clock, scripted
    /// interpreter, and recording actuator, with handles returned for the
    /// test to drive.
    pub fn for_testing(config: &AppConfig) -> (Self, TestHandles) {
        let handles = TestHandles {
            clock: SimulatedClock::new(0),
            store: MemoryRecordStore::new(),
            blobs: MemoryBlobStore::new(config.blob_public_base.clone()),
            interpreter: ScriptedInterpreter::new(),
            actuator: RecordingActuator::new(),
        };

        let clock: Arc<dyn PhysicalTimeEffects> = Arc::new(handles.clock.clone());
        let store: Arc<dyn RecordStoreEffects> = Arc::new(handles.store.clone());
        let blobs: Arc<dyn BlobStoreEffects> = Arc::new(handles.blobs.clone());
        let photos: Arc<dyn PhotoNormalizerEffects> = Arc::new(PassthroughNormalizer::new());

        let app = Self {
            temporary: Arc::new(TemporaryAccessManager::new(
                Arc::clone(&clock),
                Arc::clone(&store),
                Arc::clone(&blobs),
                Arc::clone(&photos),
                config.lifecycle(),
            )),
            authorized: AuthorizedIdentityService::new(clock, Arc::clone(&store), blobs, photos),
            queries: QueryClassifier::new(
                Arc::new(handles.interpreter.clone()),
                ImageUrlResolver::new(config.blob_public_base.clone()),
            ),
            device: DeviceService::new(Arc::new(handles.actuator.clone()), store),
        };

        (app, handles)
    }
}
