//! Haven effect handlers
//!
//! Implementations of the `haven-core` effect traits:
//!
//! - [`time::SystemClock`] and [`time::SimulatedClock`] for wall-clock and
//!   test-driven time
//! - [`store::MemoryRecordStore`] and [`blob::MemoryBlobStore`] in-memory
//!   collaborators for tests and headless runs
//! - [`interpreter::HttpQueryInterpreter`] and
//!   [`actuator::HttpDeviceActuator`] production HTTP clients
//! - [`interpreter::ScriptedInterpreter`] and
//!   [`actuator::RecordingActuator`] scripted fakes for tests
//! - [`photo::PassthroughNormalizer`] stand-in for the platform image
//!   pipeline

#![forbid(unsafe_code)]

pub mod actuator;
pub mod blob;
pub mod interpreter;
pub mod photo;
pub mod store;
pub mod time;

pub use actuator::{HttpDeviceActuator, RecordingActuator};
pub use blob::MemoryBlobStore;
pub use interpreter::{HttpQueryInterpreter, ScriptedInterpreter};
pub use photo::PassthroughNormalizer;
pub use store::MemoryRecordStore;
pub use time::{SimulatedClock, SystemClock};
