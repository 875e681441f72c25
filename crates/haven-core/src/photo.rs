//! Photo normalization contracts.
//!
//! Image decoding and resizing happen behind [`crate::effects::PhotoNormalizerEffects`];
//! this module only fixes the shapes and the normalization target.

use serde::{Deserialize, Serialize};

/// Target width for normalized face photos, in pixels.
pub const NORMALIZED_WIDTH_PX: u32 = 300;

/// Raw operator-selected photo, as encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSource {
    /// Encoded image bytes as produced by the picker
    pub bytes: Vec<u8>,
}

impl PhotoSource {
    /// A photo with no bytes has no resolvable source.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Resized, recompressed photo ready for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPhoto {
    /// Lossy-compressed JPEG bytes
    pub bytes: Vec<u8>,
    /// Width after resizing, at most [`NORMALIZED_WIDTH_PX`]
    pub width: u32,
}
