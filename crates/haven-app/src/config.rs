//! Application configuration.

use haven_lifecycle::LifecycleConfig;
use serde::Deserialize;
use std::time::Duration;

/// Static service addresses and lifecycle settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the natural-language query interpreter
    pub interpreter_url: String,
    /// Base URL of the lock/LED actuator
    pub actuator_url: String,
    /// Public base URL of the hosted blob store
    pub blob_public_base: String,
    /// Duration granted to temporary identities when none is supplied, minutes
    pub default_duration_minutes: u32,
    /// Seconds between sweep ticks
    pub sweep_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interpreter_url: "http://127.0.0.1:5000".to_string(),
            actuator_url: "http://127.0.0.1:5000".to_string(),
            blob_public_base: "https://storage.haven.local".to_string(),
            default_duration_minutes: 30,
            sweep_interval_secs: 60,
        }
    }
}

impl AppConfig {
    /// Lifecycle settings derived from this configuration.
    pub fn lifecycle(&self) -> LifecycleConfig {
        LifecycleConfig {
            default_duration_minutes: self.default_duration_minutes,
            sweep_interval: Duration::from_secs(self.sweep_interval_secs),
        }
    }
}
