//! Photo normalization effects.

use crate::photo::{NormalizedPhoto, PhotoSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for photo normalization.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum PhotoError {
    /// Input bytes could not be decoded as an image
    #[error("photo could not be decoded: {reason}")]
    Undecodable {
        /// Decoder-supplied reason
        reason: String,
    },
    /// Photo has no resolvable source
    #[error("photo source is empty")]
    EmptySource,
}

/// Resize/recompress a raw photo for upload (target width
/// [`crate::photo::NORMALIZED_WIDTH_PX`], lossy JPEG).
#[async_trait]
pub trait PhotoNormalizerEffects: Send + Sync {
    /// Produce upload-ready bytes from an operator-selected photo.
    async fn normalize(&self, photo: &PhotoSource) -> Result<NormalizedPhoto, PhotoError>;
}

#[async_trait]
impl<T: PhotoNormalizerEffects + ?Sized> PhotoNormalizerEffects for Arc<T> {
    async fn normalize(&self, photo: &PhotoSource) -> Result<NormalizedPhoto, PhotoError> {
        (**self).normalize(photo).await
    }
}
