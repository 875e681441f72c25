//! Identity records for authorized and temporary access.

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A face/name pair granted access until a computed expiry instant.
///
/// Immutable after creation; removed only by the lifecycle sweep, the first
/// time the sweep observes `now >= expires_at_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryIdentity {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Operator-supplied display name (trimmed, not unique)
    pub name: String,
    /// Blob store key for the uploaded face image
    pub face_key: String,
    /// Absolute expiry instant, Unix epoch milliseconds
    pub expires_at_ms: u64,
}

/// Insert payload for a temporary identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemporaryIdentity {
    /// Operator-supplied display name (trimmed, not unique)
    pub name: String,
    /// Blob store key for the uploaded face image
    pub face_key: String,
    /// Absolute expiry instant, Unix epoch milliseconds
    pub expires_at_ms: u64,
}

/// A permanently authorized face/name pair.
///
/// Created and removed only by explicit operator action; no background
/// process touches these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedIdentity {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Operator-supplied display name
    pub name: String,
    /// Blob store key for the uploaded face image
    pub face_key: String,
}

/// Insert payload for an authorized identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthorizedIdentity {
    /// Operator-supplied display name
    pub name: String,
    /// Blob store key for the uploaded face image
    pub face_key: String,
}
