//! Haven access lifecycle
//!
//! Two services over the same record and blob stores:
//!
//! - [`TemporaryAccessManager`] creates time-limited identities and owns the
//!   recurring sweep that revokes them once their expiry instant passes. The
//!   sweep runs as an explicit, cancellable task ([`SweeperHandle`]) so tests
//!   can drive ticks deterministically.
//! - [`AuthorizedIdentityService`] registers and removes permanently
//!   authorized identities; no background process touches those records.
//!
//! Collaborators (clock, record store, blob store, photo normalizer) are
//! injected as `Arc<dyn ...>` effect handlers from `haven-core`.

#![forbid(unsafe_code)]

mod authorized;
mod error;
mod manager;
mod sweeper;

pub use authorized::AuthorizedIdentityService;
pub use error::LifecycleError;
pub use manager::{CreateTemporaryIdentity, LifecycleConfig, TemporaryAccessManager};
pub use sweeper::SweeperHandle;
