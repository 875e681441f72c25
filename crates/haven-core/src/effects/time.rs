//! Physical wall-clock time effects.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for time operations.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum TimeError {
    /// Clock could not produce a reading
    #[error("clock unavailable: {reason}")]
    Unavailable {
        /// What went wrong
        reason: String,
    },
}

/// Wall-clock time for timestamps and expiry arithmetic.
///
/// Sweep scheduling runs on the runtime timer directly, so this trait only
/// covers readings.
#[async_trait]
pub trait PhysicalTimeEffects: Send + Sync {
    /// Current Unix timestamp in milliseconds.
    async fn now_ms(&self) -> Result<u64, TimeError>;
}

#[async_trait]
impl<T: PhysicalTimeEffects + ?Sized> PhysicalTimeEffects for Arc<T> {
    async fn now_ms(&self) -> Result<u64, TimeError> {
        (**self).now_ms().await
    }
}
