//! Effect traits for Haven's external collaborators.
//!
//! Every collaborator the services depend on is reached through one of these
//! traits, injected as `Arc<dyn ...>`. Production handlers live in
//! `haven-effects`, alongside in-memory implementations for tests.

mod actuator;
mod blob;
mod interpreter;
mod photo;
mod store;
mod time;

pub use actuator::{ActuatorError, DeviceActuatorEffects};
pub use blob::{BlobError, BlobStoreEffects};
pub use interpreter::{InterpreterError, QueryInterpreterEffects};
pub use photo::{PhotoError, PhotoNormalizerEffects};
pub use store::{RecordStoreEffects, StoreError};
pub use time::{PhysicalTimeEffects, TimeError};
