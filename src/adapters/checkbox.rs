//! Checkbox form binding
//!
//! Gives each confirmable attribute a bare-name getter and setter for UI
//! binding: `get("recorded")` reads the confirmed query and
//! `set("recorded", "1")` goes through the checkbox-style setter. The core
//! API keeps the two operations separate; this layer only joins them under
//! one name.

use crate::Confirmable;
use crate::core::models::FlagValue;
use crate::core::ports::{Clock, CurrentActor, FieldStore};
use crate::core::services::FlagOutcome;
use crate::error::Result;

/// A record bound to a registry and an acting user for form handling
#[derive(Debug)]
pub struct CheckboxForm<'a, S: ?Sized, A: ?Sized, C> {
    confirmable: &'a Confirmable<C>,
    record: &'a mut S,
    actor: &'a A,
}

impl<'a, S, A, C> CheckboxForm<'a, S, A, C>
where
    S: FieldStore + ?Sized,
    A: CurrentActor + ?Sized,
    C: Clock,
{
    /// Bind `record` for form reads and writes performed by `actor`
    pub fn new(confirmable: &'a Confirmable<C>, record: &'a mut S, actor: &'a A) -> Self {
        Self {
            confirmable,
            record,
            actor,
        }
    }

    /// Checkbox state of `name`
    pub fn get(&self, name: &str) -> Result<bool> {
        self.confirmable.is_confirmed(&*self.record, name)
    }

    /// Assign a submitted checkbox value to `name`
    pub fn set(&mut self, name: &str, value: impl Into<FlagValue>) -> Result<FlagOutcome> {
        self.confirmable
            .set_confirmed_flag(&mut *self.record, name, value, self.actor)
    }

    /// Apply submitted form parameters
    ///
    /// Parameters that do not name an attached attribute are skipped, as a
    /// form carries other inputs too. Returns the names that were applied.
    pub fn submit<I, K, V>(&mut self, params: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FlagValue>,
    {
        let mut applied = Vec::new();
        for (name, value) in params {
            let name = name.as_ref();
            if !self.confirmable.is_attached(name) {
                continue;
            }
            self.set(name, value)?;
            applied.push(name.to_string());
        }
        Ok(applied)
    }
}
