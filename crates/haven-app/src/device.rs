//! Lock/LED device service with mirrored last-known state.

use haven_core::effects::{ActuatorError, DeviceActuatorEffects, RecordStoreEffects, StoreError};
use haven_core::{DeviceState, DeviceStatus};
use std::sync::Arc;

/// Error type for device operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeviceError {
    /// The actuator command failed; the mirror was left untouched
    #[error(transparent)]
    Actuation(#[from] ActuatorError),
    /// The device switched, but the mirror write afterwards failed. The
    /// reconciliation read on next load will still show the stale state.
    #[error("device switched to {} but the mirror write failed: {source}", .status.as_str())]
    MirrorLagged {
        /// Position the device actually reached
        status: DeviceStatus,
        /// Underlying store failure
        source: StoreError,
    },
    /// Reading the mirror row failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Drives the two-command actuator and mirrors its last-known state.
///
/// The actuator call and the mirror write are a known non-atomic dual
/// write. Sequencing here is actuate-then-mirror: an actuation failure
/// surfaces immediately with no mirror write, and a mirror failure after a
/// successful actuation surfaces as [`DeviceError::MirrorLagged`].
pub struct DeviceService {
    actuator: Arc<dyn DeviceActuatorEffects>,
    store: Arc<dyn RecordStoreEffects>,
}

impl DeviceService {
    /// Create a device service over the given collaborators.
    pub fn new(
        actuator: Arc<dyn DeviceActuatorEffects>,
        store: Arc<dyn RecordStoreEffects>,
    ) -> Self {
        Self { actuator, store }
    }

    /// Switch the device and record the new state in the mirror.
    pub async fn set(&self, status: DeviceStatus) -> Result<(), DeviceError> {
        match status {
            DeviceStatus::On => self.actuator.activate().await?,
            DeviceStatus::Off => self.actuator.deactivate().await?,
        }

        self.store
            .upsert_device_state(DeviceState { status })
            .await
            .map_err(|source| {
                tracing::warn!(status = status.as_str(), error = %source, "mirror write lagged behind actuation");
                DeviceError::MirrorLagged { status, source }
            })?;

        tracing::info!(status = status.as_str(), "device switched");
        Ok(())
    }

    /// Reconciliation read of the last-known state, for initial display.
    pub async fn last_known(&self) -> Result<Option<DeviceState>, DeviceError> {
        Ok(self.store.device_state().await?)
    }
}
