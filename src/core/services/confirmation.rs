//! Confirmation service - derivation and assignment policy
//!
//! Pure logic over one [`ConfirmableAttribute`] and one host record. The
//! record, the acting user, the user directory and the clock all arrive
//! through ports, so nothing here performs I/O on its own except the
//! single write-through in [`set_confirmer`].

use chrono::{DateTime, Utc};

use crate::core::models::{ConfirmableAttribute, ConfirmerInput, FlagAction, FlagValue, UserId};
use crate::core::ports::{Clock, CurrentActor, FieldStore, UserDirectory};

/// User id stored when no current actor can be resolved
pub const DEFAULT_FALLBACK_USER_ID: UserId = UserId(1);

/// What the checkbox-style setter did to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    /// Both backing fields were cleared
    Cleared,
    /// The attribute went from unconfirmed to confirmed
    Confirmed {
        /// Stored `_at` value
        at: DateTime<Utc>,
        /// Stored `_by` value
        by: UserId,
    },
    /// Already confirmed; existing values were kept
    Unchanged,
}

/// Whether both backing fields are present
#[must_use]
pub fn is_confirmed<S: FieldStore + ?Sized>(attr: &ConfirmableAttribute, record: &S) -> bool {
    record.timestamp(attr.at_field()).is_some() && record.user_id(attr.by_field()).is_some()
}

/// Pass-through read of the `_at` field
#[must_use]
pub fn confirmed_at<S: FieldStore + ?Sized>(
    attr: &ConfirmableAttribute,
    record: &S,
) -> Option<DateTime<Utc>> {
    record.timestamp(attr.at_field())
}

/// Pass-through read of the `_by` field
#[must_use]
pub fn confirmed_by<S: FieldStore + ?Sized>(attr: &ConfirmableAttribute, record: &S) -> Option<UserId> {
    record.user_id(attr.by_field())
}

/// Resolve the acting user, degrading to `fallback` when nobody resolves
#[must_use]
pub fn resolve_actor<A: CurrentActor + ?Sized>(actor: &A, fallback: UserId) -> UserId {
    actor.current_user_id().unwrap_or_else(|| {
        log::debug!("no current actor resolved, confirming as fallback user {fallback}");
        fallback
    })
}

/// Checkbox-style setter
///
/// - falsy values clear both fields
/// - truthy values confirm an unconfirmed attribute, stamping the parsed
///   date/time or `clock.now()` and the resolved actor
/// - an attribute that is already confirmed is never clobbered
///
/// Both fields are mutated in memory only.
pub fn set_confirmed_flag<S, A, C>(
    attr: &ConfirmableAttribute,
    record: &mut S,
    value: &FlagValue,
    actor: &A,
    clock: &C,
    fallback: UserId,
) -> FlagOutcome
where
    S: FieldStore + ?Sized,
    A: CurrentActor + ?Sized,
    C: Clock + ?Sized,
{
    match value.action() {
        FlagAction::Clear => {
            record.set_user_id(attr.by_field(), None);
            record.set_timestamp(attr.at_field(), None);
            log::debug!("cleared confirmation of {}", attr.name());
            FlagOutcome::Cleared
        },
        FlagAction::Confirm(_) if is_confirmed(attr, &*record) => {
            log::debug!("{} already confirmed, keeping existing values", attr.name());
            FlagOutcome::Unchanged
        },
        FlagAction::Confirm(explicit) => {
            let at = explicit.unwrap_or_else(|| clock.now());
            let by = resolve_actor(actor, fallback);
            record.set_timestamp(attr.at_field(), Some(at));
            record.set_user_id(attr.by_field(), Some(by));
            log::debug!("confirmed {} at {at} by {by}", attr.name());
            FlagOutcome::Confirmed { at, by }
        },
    }
}

/// Resolve the `_by` field to a user record
#[must_use]
pub fn confirmer<S, D>(attr: &ConfirmableAttribute, record: &S, users: &D) -> Option<D::User>
where
    S: FieldStore + ?Sized,
    D: UserDirectory + ?Sized,
{
    confirmed_by(attr, record).and_then(|id| users.find_by_id(id))
}

/// Assign the confirmer and persist the `_by` field immediately
///
/// Invalid input clears the reference. The `_at` field is left alone.
pub fn set_confirmer<S: FieldStore + ?Sized>(
    attr: &ConfirmableAttribute,
    record: &mut S,
    who: ConfirmerInput,
) -> anyhow::Result<()> {
    if who == ConfirmerInput::Invalid {
        log::warn!("invalid confirmer for {}, clearing reference", attr.name());
    }
    record.update_user_id(attr.by_field(), who.user_id())
}
