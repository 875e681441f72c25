//! Lifecycle error type.

use haven_core::effects::{BlobError, PhotoError, StoreError, TimeError};

/// Error type for lifecycle operations.
///
/// Validation variants are rejected before any side effect; collaborator
/// variants surface the underlying failure with its own message so the
/// operator can retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LifecycleError {
    /// Name was empty after trimming
    #[error("a non-empty name is required")]
    EmptyName,
    /// No photo was supplied, or it had no resolvable source
    #[error("a photo with a resolvable source is required")]
    MissingPhoto,
    /// Photo normalization failed
    #[error(transparent)]
    Photo(#[from] PhotoError),
    /// Clock reading failed
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Blob upload failed
    #[error(transparent)]
    Blob(#[from] BlobError),
    /// Record store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
