//! Port traits (interfaces) for external collaborators
//!
//! The confirmation logic never owns storage, identity or time. It reaches
//! them through these traits:
//!
//! - [`FieldStore`] - backing field reads/writes on a host record
//! - [`CurrentActor`] - who is confirming right now
//! - [`UserDirectory`] - confirmer id to user record lookup
//! - [`Clock`] - the current instant
//!
//! Implementations live in the `adapters` module.

mod clock;
mod current_actor;
mod field_store;
mod user_directory;

pub use clock::{Clock, SystemClock};
pub use current_actor::CurrentActor;
pub use field_store::FieldStore;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub(crate) use clock::MockClock;
#[cfg(test)]
pub(crate) use current_actor::MockCurrentActor;
#[cfg(test)]
pub(crate) use field_store::MockFieldStore;
