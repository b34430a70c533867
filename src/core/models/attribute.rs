//! Confirmable attribute descriptor
//!
//! A confirmable attribute is a logical name (e.g. `recorded`) bound to two
//! backing fields on the host record:
//!
//! - `<name><suffix>_at` - when the attribute was confirmed
//! - `<name><suffix>_by` - who confirmed it
//!
//! # Examples
//!
//! ```
//! use confirmable::core::models::ConfirmableAttribute;
//!
//! let attr = ConfirmableAttribute::new("recorded");
//! assert_eq!(attr.at_field(), "recorded_confirmed_at");
//! assert_eq!(attr.by_field(), "recorded_confirmed_by");
//! assert_eq!(attr.at_alias(), Some("recorded_at"));
//!
//! let bare = ConfirmableAttribute::with_suffix("recorded", "");
//! assert_eq!(bare.at_field(), "recorded_at");
//! assert_eq!(bare.at_alias(), None);
//! ```

use serde::Serialize;

/// Suffix used when an attach call does not name one
pub const DEFAULT_SUFFIX: &str = "_confirmed";

/// Field pair descriptor for one confirmable attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmableAttribute {
    name: String,
    suffix: String,
    at_field: String,
    by_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    at_alias: Option<String>,
}

impl ConfirmableAttribute {
    /// Describe `name` with the default `_confirmed` suffix
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_suffix(name, DEFAULT_SUFFIX)
    }

    /// Describe `name` with an explicit suffix (may be empty)
    #[must_use]
    pub fn with_suffix(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        let name = name.into();
        let suffix = suffix.into();
        let stem = format!("{name}{suffix}");
        // The unsuffixed `_at` name would collide with the backing field itself
        let at_alias = (!suffix.is_empty()).then(|| format!("{name}_at"));

        Self {
            at_field: format!("{stem}_at"),
            by_field: format!("{stem}_by"),
            at_alias,
            name,
            suffix,
        }
    }

    /// Logical attribute name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Suffix inserted between the name and `_at`/`_by`
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Backing timestamp field name
    #[must_use]
    pub fn at_field(&self) -> &str {
        &self.at_field
    }

    /// Backing user reference field name
    #[must_use]
    pub fn by_field(&self) -> &str {
        &self.by_field
    }

    /// Read-through alias for the timestamp, present only with a non-empty suffix
    #[must_use]
    pub fn at_alias(&self) -> Option<&str> {
        self.at_alias.as_deref()
    }

    /// Whether `field` names this attribute's timestamp, directly or by alias
    #[must_use]
    pub fn answers_to_timestamp(&self, field: &str) -> bool {
        field == self.at_field || self.at_alias.as_deref() == Some(field)
    }
}
