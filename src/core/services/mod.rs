//! Business logic for confirmable attributes
//!
//! - [`confirmation`] - state derivation and assignment policy for one attribute
//! - [`registry`] - the attach operation and per-name routing

pub mod confirmation;
pub mod registry;

pub use confirmation::{DEFAULT_FALLBACK_USER_ID, FlagOutcome, resolve_actor};
pub use registry::{AttachArg, AttachOptions, Confirmable};
