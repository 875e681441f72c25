//! Mirrored lock/LED device state.

use serde::{Deserialize, Serialize};

/// Lock/LED switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// Device is unlocked / LED lit
    On,
    /// Device is locked / LED dark
    Off,
}

impl DeviceStatus {
    /// Wire representation used by the mirror row.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::On => "on",
            DeviceStatus::Off => "off",
        }
    }
}

/// Last-known device state, dual-written next to the physical actuation.
///
/// The actuator call and the mirror write are not atomic; the mirror exists
/// for initial-state display on next load, not as a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Switch position at the time of the last successful actuation
    pub status: DeviceStatus,
}
