//! Confirmation status snapshot

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::user::UserId;

/// Point-in-time view of one confirmable attribute on one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationStatus {
    /// Logical attribute name
    pub name: String,
    /// Both backing fields present
    pub confirmed: bool,
    /// Value of the `_at` field
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Value of the `_by` field
    pub confirmed_by: Option<UserId>,
}
