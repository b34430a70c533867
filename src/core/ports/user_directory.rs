//! User lookup port

use super::super::models::{UserId, UserRecord};

/// Resolves user identifiers to full user records
pub trait UserDirectory {
    /// Record type returned by lookups
    type User: UserRecord;

    /// Find a user by identifier, `None` when no such user exists
    fn find_by_id(&self, id: UserId) -> Option<Self::User>;
}
