//! Current actor port
//!
//! Supplies the identifier of the user performing a confirmation. The
//! actor is passed explicitly into the flag setter rather than looked up
//! from global state.

use super::super::models::UserId;

/// Resolves the active user in the calling context
#[cfg_attr(test, mockall::automock)]
pub trait CurrentActor {
    /// The active user's identifier, `None` when nobody is signed in
    fn current_user_id(&self) -> Option<UserId>;
}

impl CurrentActor for UserId {
    fn current_user_id(&self) -> Option<UserId> {
        Some(*self)
    }
}

impl CurrentActor for Option<UserId> {
    fn current_user_id(&self) -> Option<UserId> {
        *self
    }
}
