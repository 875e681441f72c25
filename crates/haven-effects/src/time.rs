//! Time effect handlers.

use async_trait::async_trait;
use haven_core::effects::{PhysicalTimeEffects, TimeError};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Real wall-clock handler for production use.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock handler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PhysicalTimeEffects for SystemClock {
    async fn now_ms(&self) -> Result<u64, TimeError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|e| TimeError::Unavailable {
                reason: e.to_string(),
            })
    }
}

/// Simulated clock for testing.
///
/// Time only moves when a test calls [`SimulatedClock::advance_ms`] or
/// [`SimulatedClock::set_ms`].
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    current_ms: Arc<Mutex<u64>>,
}

impl SimulatedClock {
    /// Create a simulated clock starting at the given epoch milliseconds.
    pub fn new(start_ms: u64) -> Self {
        Self {
            current_ms: Arc::new(Mutex::new(start_ms)),
        }
    }

    /// Advance simulated time.
    pub fn advance_ms(&self, delta_ms: u64) {
        let mut now = self.current_ms.lock().unwrap_or_else(|e| e.into_inner());
        *now += delta_ms;
    }

    /// Set the absolute simulated time.
    pub fn set_ms(&self, now_ms: u64) {
        let mut now = self.current_ms.lock().unwrap_or_else(|e| e.into_inner());
        *now = now_ms;
    }

    /// Current simulated time.
    pub fn get_ms(&self) -> u64 {
        *self.current_ms.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl PhysicalTimeEffects for SimulatedClock {
    async fn now_ms(&self) -> Result<u64, TimeError> {
        Ok(self.get_ms())
    }
}
