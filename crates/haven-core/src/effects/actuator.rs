//! Device actuator effects.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for actuator commands.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum ActuatorError {
    /// Command could not be delivered
    #[error("actuator unreachable: {reason}")]
    Transport {
        /// Transport-supplied reason
        reason: String,
    },
    /// Device answered with a non-2xx status
    #[error("actuator rejected command with HTTP {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
    },
}

/// Two-command lock/LED actuator.
#[async_trait]
pub trait DeviceActuatorEffects: Send + Sync {
    /// Switch the device on (unlock / LED lit).
    async fn activate(&self) -> Result<(), ActuatorError>;

    /// Switch the device off (lock / LED dark).
    async fn deactivate(&self) -> Result<(), ActuatorError>;
}

#[async_trait]
impl<T: DeviceActuatorEffects + ?Sized> DeviceActuatorEffects for Arc<T> {
    async fn activate(&self) -> Result<(), ActuatorError> {
        (**self).activate().await
    }

    async fn deactivate(&self) -> Result<(), ActuatorError> {
        (**self).deactivate().await
    }
}
