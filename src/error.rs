//! Error types for confirmable attributes
//!
//! Accessors on a known attribute are total. Errors only arise from
//! addressing something that was never attached, from invalid attach
//! arguments, or from the persistence port failing a write-through.
//!
//! Two degenerate inputs are deliberately *not* errors:
//!
//! - no resolvable current actor: the fallback user id is stored instead
//! - a confirmer that is neither a user record nor an id: the reference is
//!   cleared

use thiserror::Error;

/// Errors raised by [`Confirmable`](crate::Confirmable) operations
#[derive(Debug, Error)]
pub enum ConfirmableError {
    /// No attribute with this name was attached
    #[error("unknown confirmable attribute: {0}")]
    UnknownAttribute(String),

    /// Field name is neither a backing field nor an alias of an attached attribute
    #[error("unknown confirmable field: {0}")]
    UnknownField(String),

    /// Attribute names must be non-blank identifiers
    #[error("invalid attribute name: {0:?}")]
    InvalidName(String),

    /// The persistence port failed a write-through
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result alias for confirmable operations
pub type Result<T> = std::result::Result<T, ConfirmableError>;
