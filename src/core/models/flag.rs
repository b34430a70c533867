//! Checkbox-style flag values
//!
//! Form inputs arrive as booleans or strings. A [`FlagValue`] is reduced to a
//! [`FlagAction`] before it touches a record:
//!
//! - `false`, `"0"` or a blank string clear the confirmation
//! - a date/time string confirms at that instant
//! - anything else confirms now
//!
//! # Examples
//!
//! ```
//! use confirmable::core::models::{FlagAction, FlagValue};
//!
//! assert_eq!(FlagValue::from("0").action(), FlagAction::Clear);
//! assert_eq!(FlagValue::from(true).action(), FlagAction::Confirm(None));
//! assert!(matches!(
//!     FlagValue::from("2024-03-01").action(),
//!     FlagAction::Confirm(Some(_))
//! ));
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Naive date/time layouts accepted in addition to RFC 3339
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Raw value handed to the checkbox-style setter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// A boolean flag
    Bool(bool),
    /// A form string: `"0"`, `"1"`, or a date/time
    Text(String),
}

/// What a flag value asks the setter to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAction {
    /// Clear both backing fields
    Clear,
    /// Confirm, at the given instant or now when `None`
    Confirm(Option<DateTime<Utc>>),
}

impl FlagValue {
    /// Reduce this value to the action the setter performs
    #[must_use]
    pub fn action(&self) -> FlagAction {
        match self {
            Self::Bool(false) => FlagAction::Clear,
            Self::Bool(true) => FlagAction::Confirm(None),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() || text == "0" {
                    FlagAction::Clear
                } else {
                    FlagAction::Confirm(parse_timestamp(text))
                }
            },
        }
    }

    /// Whether this value clears the confirmation
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        self.action() == FlagAction::Clear
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse a date or date/time string as a UTC timestamp
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM:SS` and a
/// bare `YYYY-MM-DD` (midnight UTC).
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
