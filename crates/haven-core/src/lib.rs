//! Haven core domain model
//!
//! This crate defines the data contracts and effect traits shared by the
//! Haven access-control components:
//!
//! - identity records (authorized and temporary, the latter carrying an
//!   expiry instant enforced by the lifecycle sweep)
//! - observation records returned by the query interpreter, as a tagged
//!   response contract
//! - the device lock/LED mirror state
//! - effect traits for every external collaborator (clock, record store,
//!   blob store, query interpreter, device actuator, photo normalizer)
//!
//! # Design Principles
//!
//! - Collaborators are injected through effect traits, never reached as
//!   ambient globals, so every service can run against in-memory fakes.
//! - Interpreter responses are a sum type (`Success`/`Failure`), not an
//!   untyped map; any non-success status is a `Failure`.
//! - No I/O happens in this crate.

#![forbid(unsafe_code)]

pub mod blob;
pub mod device;
pub mod effects;
pub mod identity;
pub mod observation;
pub mod photo;

pub use blob::{public_object_url, FaceNamespace};
pub use device::{DeviceState, DeviceStatus};
pub use identity::{
    AuthorizedIdentity, NewAuthorizedIdentity, NewTemporaryIdentity, RecordId, TemporaryIdentity,
};
pub use observation::{InterpreterResponse, ObservationRecord};
pub use photo::{NormalizedPhoto, PhotoSource, NORMALIZED_WIDTH_PX};
