//! confirmable - confirmed-at / confirmed-by semantics for record attributes
//!
//! Attach one or more attribute names to a record type and each gains a
//! confirmation timestamp, a confirming user reference, a confirmed query
//! and a checkbox-style setter. Storage, the current user and user lookup
//! are external collaborators reached through the traits in
//! [`crate::core::ports`].
//!
//! ## Degradation policy
//!
//! No accessor fails on degenerate input. When no current actor resolves,
//! the configured fallback user id (default `1`) is recorded. A confirmer
//! that is neither a user record nor an id clears the reference.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::core::services::{AttachArg, AttachOptions, Confirmable, FlagOutcome};
pub use config::ConfirmableConfig;
pub use error::{ConfirmableError, Result};
