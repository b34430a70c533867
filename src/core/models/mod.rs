//! Domain models for confirmable attributes
//!
//! - [`ConfirmableAttribute`] - name to backing field pair descriptor
//! - [`FlagValue`] - checkbox-style setter input
//! - [`ConfirmerInput`] - confirmer setter input
//! - [`UserId`] / [`UserRecord`] - confirmer identity
//! - [`ConfirmationStatus`] - serialisable status snapshot

mod attribute;
mod confirmer;
mod flag;
mod status;
mod user;

pub use attribute::{ConfirmableAttribute, DEFAULT_SUFFIX};
pub use confirmer::ConfirmerInput;
pub use flag::{FlagAction, FlagValue, parse_timestamp};
pub use status::ConfirmationStatus;
pub use user::{UserId, UserRecord};
