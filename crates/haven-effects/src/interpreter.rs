//! Query interpreter handlers: production HTTP client and scripted fake.

use async_trait::async_trait;
use haven_core::effects::{InterpreterError, QueryInterpreterEffects};
use haven_core::InterpreterResponse;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// HTTP client for the query interpreter endpoint.
///
/// Issues `GET {base}/query?query=<url-encoded text>` and parses the tagged
/// JSON body. One attempt per call, transport-default timeout.
#[derive(Debug, Clone)]
pub struct HttpQueryInterpreter {
    base_url: String,
    client: reqwest::Client,
}

impl HttpQueryInterpreter {
    /// Create a client for the interpreter at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QueryInterpreterEffects for HttpQueryInterpreter {
    async fn interpret(&self, query: &str) -> Result<InterpreterResponse, InterpreterError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| InterpreterError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "query service answered non-2xx");
            return Err(InterpreterError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<InterpreterResponse>()
            .await
            .map_err(|e| InterpreterError::Malformed {
                reason: e.to_string(),
            })
    }
}

/// Scripted interpreter for testing.
///
/// Pops pre-loaded outcomes in order and records every query it receives,
/// so tests can assert both the classification result and whether a network
/// call was made at all.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInterpreter {
    script: Arc<Mutex<VecDeque<Result<InterpreterResponse, InterpreterError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInterpreter {
    /// Create an interpreter with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next outcome to return.
    pub fn push(&self, outcome: Result<InterpreterResponse, InterpreterError>) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
    }

    /// Queries received so far, in order.
    pub fn received(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl QueryInterpreterEffects for ScriptedInterpreter {
    async fn interpret(&self, query: &str) -> Result<InterpreterResponse, InterpreterError> {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.to_string());
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(Err(InterpreterError::Transport {
                reason: "scripted interpreter exhausted".to_string(),
            }))
    }
}
