//! Haven application facade
//!
//! Wires the lifecycle manager, query classifier, and device service over a
//! shared set of effect handlers. Frontends hold a [`HavenApp`] and call its
//! services; nothing here renders UI.
//!
//! Production wiring ([`HavenApp::new`]) builds the HTTP interpreter and
//! actuator clients from [`AppConfig`] and runs on the system clock; the
//! record/blob stores and photo pipeline stay injected, since those are
//! hosted collaborators. [`HavenApp::for_testing`] substitutes in-memory and
//! scripted handlers throughout.

#![forbid(unsafe_code)]

mod app;
mod config;
mod device;

pub use app::{HavenApp, TestHandles};
pub use config::AppConfig;
pub use device::{DeviceError, DeviceService};
