//! Query interpreter effects.

use crate::observation::InterpreterResponse;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for interpreter transport failures.
///
/// A reachable interpreter that answers with a non-success status is not an
/// error at this level; that case is carried in
/// [`InterpreterResponse::Failure`]. These variants cover the request never
/// completing or the body not parsing.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum InterpreterError {
    /// Request could not be sent or timed out
    #[error("query service unreachable: {reason}")]
    Transport {
        /// Transport-supplied reason
        reason: String,
    },
    /// Endpoint answered with a non-2xx status
    #[error("query service returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },
    /// Body was not a well-formed interpreter response
    #[error("malformed interpreter response: {reason}")]
    Malformed {
        /// Parse failure detail
        reason: String,
    },
}

/// Natural-language query interpretation.
#[async_trait]
pub trait QueryInterpreterEffects: Send + Sync {
    /// Submit one query and await one tagged response. Single attempt,
    /// transport-default timeout.
    async fn interpret(&self, query: &str) -> Result<InterpreterResponse, InterpreterError>;
}

#[async_trait]
impl<T: QueryInterpreterEffects + ?Sized> QueryInterpreterEffects for Arc<T> {
    async fn interpret(&self, query: &str) -> Result<InterpreterResponse, InterpreterError> {
        (**self).interpret(query).await
    }
}
