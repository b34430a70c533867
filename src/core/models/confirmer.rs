//! Confirmer assignment input
//!
//! The confirmer setter accepts a user record or a raw identifier. Any other
//! input is coerced to [`ConfirmerInput::Invalid`], which clears the
//! reference instead of failing.

use serde_json::Value;

use super::user::{UserId, UserRecord};

/// Value handed to the confirmer setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmerInput {
    /// A user identifier, taken directly or from a user record
    Id(UserId),
    /// Neither a user record nor an identifier
    Invalid,
}

impl ConfirmerInput {
    /// Interpret a dynamically typed value
    ///
    /// Integers become identifiers. Strings, floats, booleans, objects and
    /// `null` are all invalid.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        value
            .as_i64()
            .map_or(Self::Invalid, |id| Self::Id(UserId(id)))
    }

    /// The identifier to store, `None` for invalid input
    #[must_use]
    pub const fn user_id(self) -> Option<UserId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Invalid => None,
        }
    }
}

impl<U: UserRecord> From<&U> for ConfirmerInput {
    fn from(user: &U) -> Self {
        Self::Id(user.id())
    }
}

impl From<UserId> for ConfirmerInput {
    fn from(id: UserId) -> Self {
        Self::Id(id)
    }
}

impl From<i64> for ConfirmerInput {
    fn from(id: i64) -> Self {
        Self::Id(UserId(id))
    }
}

impl From<Option<UserId>> for ConfirmerInput {
    fn from(id: Option<UserId>) -> Self {
        id.map_or(Self::Invalid, Self::Id)
    }
}
