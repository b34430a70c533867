//! Field storage port
//!
//! Defines how the confirmation logic reads and writes backing fields on a
//! host record.

use chrono::{DateTime, Utc};

use super::super::models::UserId;

/// Named-field access on one host record
///
/// The `set_*` methods mutate the in-memory record only. `update_user_id`
/// updates one field and persists it immediately, independent of any other
/// pending in-memory changes.
#[cfg_attr(test, mockall::automock)]
pub trait FieldStore {
    /// Read a timestamp field (`None` = absent)
    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>>;

    /// Write a timestamp field in memory
    fn set_timestamp(&mut self, field: &str, value: Option<DateTime<Utc>>);

    /// Read a user reference field (`None` = absent)
    fn user_id(&self, field: &str) -> Option<UserId>;

    /// Write a user reference field in memory
    fn set_user_id(&mut self, field: &str, value: Option<UserId>);

    /// Update a user reference field and persist it immediately
    ///
    /// Exactly one write reaches the backing store per call.
    fn update_user_id(&mut self, field: &str, value: Option<UserId>) -> anyhow::Result<()>;
}
