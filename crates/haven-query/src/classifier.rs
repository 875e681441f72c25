//! Query submission and observation partitioning.

use crate::format::format_observed_at;
use crate::images::{ImageSource, ImageUrlResolver};
use haven_core::effects::QueryInterpreterEffects;
use haven_core::{InterpreterResponse, ObservationRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for query submission.
///
/// The only hard error is a validation failure; every upstream problem is
/// normalized into a soft-failure [`ClassifiedObservations`] instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// Query text was empty after trimming; no network call was made
    #[error("query text must not be empty")]
    EmptyQuery,
}

/// One display-ready observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayObservation {
    /// Detected name as returned by the interpreter
    pub name: String,
    /// Formatted local timestamp (`D-M-YYYY at H:MM`)
    pub observed_at: String,
    /// Authorization verdict from the interpreter
    pub authorized: bool,
    /// Resolved image source
    pub image: ImageSource,
}

/// Entry in a classified group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationEntry {
    /// A real observation record
    Observation(DisplayObservation),
    /// Synthetic message entry produced by a soft failure
    Notice {
        /// Operator-visible message
        message: String,
    },
}

/// Two ordered, display-ready groups of observations.
///
/// Grouping is stable: original server order is preserved within each group,
/// and every input record lands in exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassifiedObservations {
    /// Records the interpreter marked authorized
    pub authorized: Vec<ObservationEntry>,
    /// Records the interpreter marked non-authorized, plus any soft-failure
    /// notice
    pub non_authorized: Vec<ObservationEntry>,
}

impl ClassifiedObservations {
    fn notice(message: String) -> Self {
        Self {
            authorized: Vec::new(),
            non_authorized: vec![ObservationEntry::Notice { message }],
        }
    }
}

/// Submits natural-language queries and classifies the results.
pub struct QueryClassifier {
    interpreter: Arc<dyn QueryInterpreterEffects>,
    images: ImageUrlResolver,
}

impl QueryClassifier {
    /// Create a classifier over the given interpreter and image resolver.
    pub fn new(interpreter: Arc<dyn QueryInterpreterEffects>, images: ImageUrlResolver) -> Self {
        Self {
            interpreter,
            images,
        }
    }

    /// Submit one query and return the two classified groups.
    ///
    /// Empty queries fail fast without a network call. Upstream non-success
    /// statuses, transport errors, and malformed bodies all produce a
    /// well-formed soft-failure result so the operator always sees something.
    pub async fn submit(&self, query: &str) -> Result<ClassifiedObservations, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        match self.interpreter.interpret(query).await {
            Ok(InterpreterResponse::Success { data }) => Ok(self.classify(data)),
            Ok(InterpreterResponse::Failure { message }) => {
                tracing::debug!(message, "query service answered with non-success status");
                Ok(ClassifiedObservations::notice(message))
            }
            Err(e) => {
                tracing::warn!(error = %e, "query interpretation failed");
                Ok(ClassifiedObservations::notice(format!("Error: \"{e}\"")))
            }
        }
    }

    /// Partition records in original order into authorized / non-authorized
    /// groups, resolving each image reference and formatting each timestamp.
    pub fn classify(&self, data: Vec<ObservationRecord>) -> ClassifiedObservations {
        let mut groups = ClassifiedObservations::default();
        for record in data {
            let entry = ObservationEntry::Observation(DisplayObservation {
                observed_at: format_observed_at(&record.timestamp),
                image: self.images.resolve(record.image_url.as_deref()),
                authorized: record.authorized,
                name: record.name,
            });
            if record.authorized {
                groups.authorized.push(entry);
            } else {
                groups.non_authorized.push(entry);
            }
        }
        groups
    }
}
