//! User identity model
//!
//! A confirmation only stores the confirming user's identifier. The full
//! user record lives elsewhere and is resolved on demand through a
//! [`UserDirectory`](crate::core::ports::UserDirectory).

use serde::{Deserialize, Serialize};

/// Identifier of a user stored in a `_by` backing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// The raw integer value
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| format!("Invalid user id: {s}"))
    }
}

/// A user record that can act as a confirmer
pub trait UserRecord {
    /// Identifier stored in the `_by` field when this user confirms
    fn id(&self) -> UserId;
}
