//! Device actuator handlers: production HTTP client and recording fake.

use async_trait::async_trait;
use haven_core::effects::{ActuatorError, DeviceActuatorEffects};
use haven_core::DeviceStatus;
use std::sync::{Arc, Mutex};

/// HTTP client for the lock/LED actuator.
///
/// Sends `POST {base}/on` and `POST {base}/off` with no body; 2xx implies
/// success, anything else is a failure.
#[derive(Debug, Clone)]
pub struct HttpDeviceActuator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeviceActuator {
    /// Create a client for the actuator at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_command(&self, path: &str) -> Result<(), ActuatorError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let response =
            self.client
                .post(&url)
                .send()
                .await
                .map_err(|e| ActuatorError::Transport {
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%url, "actuator command accepted");
            Ok(())
        } else {
            Err(ActuatorError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl DeviceActuatorEffects for HttpDeviceActuator {
    async fn activate(&self) -> Result<(), ActuatorError> {
        self.post_command("/on").await
    }

    async fn deactivate(&self) -> Result<(), ActuatorError> {
        self.post_command("/off").await
    }
}

/// Recording actuator for testing.
///
/// Logs every command and can be told to fail, so tests can check the
/// ordering of actuation against the mirror write.
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    commands: Arc<Mutex<Vec<DeviceStatus>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl RecordingActuator {
    /// Create an actuator that accepts every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next command fail with a transport error.
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> Vec<DeviceStatus> {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn record(&self, status: DeviceStatus) -> Result<(), ActuatorError> {
        let mut fail = self.fail_next.lock().unwrap_or_else(|e| e.into_inner());
        if *fail {
            *fail = false;
            return Err(ActuatorError::Transport {
                reason: "scripted actuator failure".to_string(),
            });
        }
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(status);
        Ok(())
    }
}

#[async_trait]
impl DeviceActuatorEffects for RecordingActuator {
    async fn activate(&self) -> Result<(), ActuatorError> {
        self.record(DeviceStatus::On)
    }

    async fn deactivate(&self) -> Result<(), ActuatorError> {
        self.record(DeviceStatus::Off)
    }
}
