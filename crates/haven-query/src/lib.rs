//! Haven authorization query classifier
//!
//! Takes a free-text question, delegates interpretation to the external
//! query service, and partitions the returned observation records into two
//! ordered, display-ready groups (authorized / non-authorized). Each entry
//! is enriched with a resolved image source and a formatted timestamp.
//!
//! Upstream failures are soft: a non-success status, transport error, or
//! malformed body becomes a one-entry message result, never an exception
//! past the [`QueryClassifier::submit`] boundary.

#![forbid(unsafe_code)]

mod classifier;
mod format;
mod images;

pub use classifier::{
    ClassifiedObservations, DisplayObservation, ObservationEntry, QueryClassifier, QueryError,
};
pub use format::format_observed_at;
pub use images::{ImageSource, ImageUrlResolver};
