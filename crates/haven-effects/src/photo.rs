//! Photo normalizer handlers.

use async_trait::async_trait;
use haven_core::effects::{PhotoError, PhotoNormalizerEffects};
use haven_core::{NormalizedPhoto, PhotoSource, NORMALIZED_WIDTH_PX};

/// Passthrough normalizer for testing and headless deployments.
///
/// The real resize/recompress step runs on the platform image pipeline;
/// this handler keeps the bytes as-is while honoring the empty-source
/// precondition, which is all the lifecycle logic depends on.
#[derive(Debug, Clone, Default)]
pub struct PassthroughNormalizer;

impl PassthroughNormalizer {
    /// Create a new passthrough normalizer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PhotoNormalizerEffects for PassthroughNormalizer {
    async fn normalize(&self, photo: &PhotoSource) -> Result<NormalizedPhoto, PhotoError> {
        if photo.is_empty() {
            return Err(PhotoError::EmptySource);
        }
        Ok(NormalizedPhoto {
            bytes: photo.bytes.clone(),
            width: NORMALIZED_WIDTH_PX,
        })
    }
}
