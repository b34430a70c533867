//! Confirmable registry - the attach operation
//!
//! A [`Confirmable`] is declared once per host record type. It maps each
//! attached attribute name to its [`ConfirmableAttribute`] descriptor and
//! routes accessor calls on any record of that type to the confirmation
//! service.
//!
//! # Examples
//!
//! ```
//! use confirmable::{AttachOptions, Confirmable};
//! use confirmable::adapters::memory::MemoryRecord;
//! use confirmable::core::models::UserId;
//! use confirmable::core::ports::FieldStore;
//!
//! let mut confirmable = Confirmable::new();
//! confirmable.attach(["recorded", "produced"]).unwrap();
//! confirmable
//!     .attach_with(["edited"], &AttachOptions::with_suffix("_approved"))
//!     .unwrap();
//!
//! let mut record = MemoryRecord::new();
//! confirmable
//!     .set_confirmed_flag(&mut record, "recorded", true, &UserId(7))
//!     .unwrap();
//!
//! assert!(confirmable.is_confirmed(&record, "recorded").unwrap());
//! assert!(!confirmable.is_confirmed(&record, "produced").unwrap());
//! assert_eq!(record.user_id("recorded_confirmed_by"), Some(UserId(7)));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confirmation::{self, DEFAULT_FALLBACK_USER_ID, FlagOutcome};
use crate::core::models::{
    ConfirmableAttribute, ConfirmationStatus, ConfirmerInput, DEFAULT_SUFFIX, FlagValue, UserId,
};
use crate::core::ports::{Clock, CurrentActor, FieldStore, SystemClock, UserDirectory};
use crate::error::{ConfirmableError, Result};

/// Options for one attach call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachOptions {
    /// Suffix between the name and `_at`/`_by`; applies to every name in the call
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for AttachOptions {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

impl AttachOptions {
    /// Options with an explicit suffix
    #[must_use]
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

/// One argument of an attach call: a name, or trailing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachArg {
    /// An attribute name
    Name(String),
    /// Configuration for every name in the call
    Options(AttachOptions),
}

impl From<&str> for AttachArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AttachArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<AttachOptions> for AttachArg {
    fn from(options: AttachOptions) -> Self {
        Self::Options(options)
    }
}

/// Registry of confirmable attributes for one host record type
#[derive(Debug, Clone)]
pub struct Confirmable<C = SystemClock> {
    attributes: Vec<ConfirmableAttribute>,
    fallback_user_id: UserId,
    clock: C,
}

impl Default for Confirmable {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmable {
    /// Empty registry using the wall clock and fallback user `1`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
            fallback_user_id: DEFAULT_FALLBACK_USER_ID,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Confirmable<C> {
    /// Replace the clock used for "now"
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Confirmable<C2> {
        Confirmable {
            attributes: self.attributes,
            fallback_user_id: self.fallback_user_id,
            clock,
        }
    }

    /// Replace the user id stored when no current actor resolves
    #[must_use]
    pub fn with_fallback_user_id(mut self, fallback: UserId) -> Self {
        self.fallback_user_id = fallback;
        self
    }

    /// User id stored when no current actor resolves
    #[must_use]
    pub const fn fallback_user_id(&self) -> UserId {
        self.fallback_user_id
    }

    /// Attach names, with any options argument configuring the whole call
    ///
    /// When several options arguments appear, the last one wins. Attaching
    /// a name twice replaces its descriptor.
    pub fn attach<I, T>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<AttachArg>,
    {
        let mut names = Vec::new();
        let mut options = AttachOptions::default();

        for arg in args {
            match arg.into() {
                AttachArg::Name(name) => names.push(name),
                AttachArg::Options(opts) => options = opts,
            }
        }

        self.attach_with(names, &options)
    }

    /// Attach names with explicit options
    pub fn attach_with<I, T>(&mut self, names: I, options: &AttachOptions) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        // Validate the whole call before installing anything
        if let Some(bad) = names.iter().find(|name| !is_valid_name(name)) {
            return Err(ConfirmableError::InvalidName(bad.clone()));
        }

        for name in names {
            let attr = ConfirmableAttribute::with_suffix(name, options.suffix.clone());
            log::debug!(
                "attached confirmable {} ({}, {})",
                attr.name(),
                attr.at_field(),
                attr.by_field()
            );
            match self.attributes.iter_mut().find(|a| a.name() == attr.name()) {
                Some(existing) => *existing = attr,
                None => self.attributes.push(attr),
            }
        }

        Ok(())
    }

    /// Attached attributes in attach order
    pub fn attributes(&self) -> impl Iterator<Item = &ConfirmableAttribute> {
        self.attributes.iter()
    }

    /// Whether `name` was attached
    #[must_use]
    pub fn is_attached(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name() == name)
    }

    /// Descriptor for an attached name
    pub fn attribute(&self, name: &str) -> Result<&ConfirmableAttribute> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| ConfirmableError::UnknownAttribute(name.to_string()))
    }

    /// Every backing field and alias the attached attributes answer to
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.attributes
            .iter()
            .flat_map(|a| {
                [Some(a.at_field()), Some(a.by_field()), a.at_alias()]
                    .into_iter()
                    .flatten()
                    .map(str::to_string)
            })
            .collect()
    }

    /// Both backing fields of `name` are present
    pub fn is_confirmed<S: FieldStore + ?Sized>(&self, record: &S, name: &str) -> Result<bool> {
        Ok(confirmation::is_confirmed(self.attribute(name)?, record))
    }

    /// Value of the `_at` field of `name`
    pub fn confirmed_at<S: FieldStore + ?Sized>(
        &self,
        record: &S,
        name: &str,
    ) -> Result<Option<DateTime<Utc>>> {
        Ok(confirmation::confirmed_at(self.attribute(name)?, record))
    }

    /// Read a timestamp by backing field name or `_at` alias
    pub fn read_timestamp_field<S: FieldStore + ?Sized>(
        &self,
        record: &S,
        field: &str,
    ) -> Result<Option<DateTime<Utc>>> {
        self.attributes
            .iter()
            .find(|a| a.answers_to_timestamp(field))
            .map(|a| confirmation::confirmed_at(a, record))
            .ok_or_else(|| ConfirmableError::UnknownField(field.to_string()))
    }

    /// Checkbox-style setter; see [`confirmation::set_confirmed_flag`]
    pub fn set_confirmed_flag<S, A>(
        &self,
        record: &mut S,
        name: &str,
        value: impl Into<FlagValue>,
        actor: &A,
    ) -> Result<FlagOutcome>
    where
        S: FieldStore + ?Sized,
        A: CurrentActor + ?Sized,
    {
        let attr = self.attribute(name)?;
        Ok(confirmation::set_confirmed_flag(
            attr,
            record,
            &value.into(),
            actor,
            &self.clock,
            self.fallback_user_id,
        ))
    }

    /// Resolve the confirmer of `name` through `users`
    pub fn confirmer<S, D>(&self, record: &S, name: &str, users: &D) -> Result<Option<D::User>>
    where
        S: FieldStore + ?Sized,
        D: UserDirectory + ?Sized,
    {
        Ok(confirmation::confirmer(self.attribute(name)?, record, users))
    }

    /// Assign and persist the confirmer of `name`
    pub fn set_confirmer<S: FieldStore + ?Sized>(
        &self,
        record: &mut S,
        name: &str,
        who: impl Into<ConfirmerInput>,
    ) -> Result<()> {
        let attr = self.attribute(name)?;
        confirmation::set_confirmer(attr, record, who.into())?;
        Ok(())
    }

    /// Status snapshot of `name`
    pub fn status<S: FieldStore + ?Sized>(&self, record: &S, name: &str) -> Result<ConfirmationStatus> {
        Ok(status_of(self.attribute(name)?, record))
    }

    /// Status snapshots of every attached attribute
    #[must_use]
    pub fn statuses<S: FieldStore + ?Sized>(&self, record: &S) -> Vec<ConfirmationStatus> {
        self.attributes.iter().map(|a| status_of(a, record)).collect()
    }
}

fn status_of<S: FieldStore + ?Sized>(attr: &ConfirmableAttribute, record: &S) -> ConfirmationStatus {
    ConfirmationStatus {
        name: attr.name().to_string(),
        confirmed: confirmation::is_confirmed(attr, record),
        confirmed_at: confirmation::confirmed_at(attr, record),
        confirmed_by: confirmation::confirmed_by(attr, record),
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
