//! Wire contract for the natural-language query interpreter.

use serde::{Deserialize, Deserializer, Serialize};

/// One detected face event returned by the query interpreter.
///
/// Read-only from the classifier's perspective: it never creates, mutates,
/// or deletes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Detected name; may or may not match a known identity
    pub name: String,
    /// Instant of observation as supplied by the server (RFC 3339 expected)
    pub timestamp: String,
    /// Authorization verdict assigned by the interpreter
    pub authorized: bool,
    /// Optional image reference: an absolute URL or a relative blob key
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Tagged interpreter response.
///
/// The endpoint returns `{status: "success", data: [...]}` on success and
/// `{status: <other>, message: "..."}` otherwise. Any status other than
/// `"success"` deserializes to [`InterpreterResponse::Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterResponse {
    /// Ordered sequence of observation records
    Success {
        /// Records in original server order
        data: Vec<ObservationRecord>,
    },
    /// Non-success status with a server-supplied message
    Failure {
        /// Human-readable message for the operator
        message: String,
    },
}

#[derive(Deserialize)]
struct WireResponse {
    status: String,
    #[serde(default)]
    data: Vec<ObservationRecord>,
    #[serde(default)]
    message: Option<String>,
}

impl<'de> Deserialize<'de> for InterpreterResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireResponse::deserialize(deserializer)?;
        if wire.status == "success" {
            Ok(InterpreterResponse::Success { data: wire.data })
        } else {
            let message = wire
                .message
                .unwrap_or_else(|| format!("query service returned status \"{}\"", wire.status));
            Ok(InterpreterResponse::Failure { message })
        }
    }
}
