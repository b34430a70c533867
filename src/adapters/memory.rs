//! In-memory records and users
//!
//! Reference implementations of [`FieldStore`] and [`UserDirectory`]. A
//! [`MemoryRecord`] keeps its "persisted" state separate from its in-memory
//! fields so callers can observe exactly which writes reached storage.

use std::collections::BTreeMap;

use anyhow::bail;
use chrono::{DateTime, Utc};

use crate::core::models::{UserId, UserRecord};
use crate::core::ports::{FieldStore, UserDirectory};

/// A host record held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRecord {
    timestamps: BTreeMap<String, DateTime<Utc>>,
    user_ids: BTreeMap<String, UserId>,
    persisted: BTreeMap<String, Option<UserId>>,
    persist_count: usize,
    fail_persist: bool,
}

impl MemoryRecord {
    /// Record with every field absent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whose write-throughs always fail
    #[must_use]
    pub fn with_failing_persistence() -> Self {
        Self {
            fail_persist: true,
            ..Self::default()
        }
    }

    /// Last value persisted for `field`, `None` if it was never persisted
    #[must_use]
    pub fn persisted_user_id(&self, field: &str) -> Option<Option<UserId>> {
        self.persisted.get(field).copied()
    }

    /// Number of single-field writes that reached storage
    #[must_use]
    pub const fn persist_count(&self) -> usize {
        self.persist_count
    }
}

impl FieldStore for MemoryRecord {
    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.timestamps.get(field).copied()
    }

    fn set_timestamp(&mut self, field: &str, value: Option<DateTime<Utc>>) {
        match value {
            Some(at) => self.timestamps.insert(field.to_string(), at),
            None => self.timestamps.remove(field),
        };
    }

    fn user_id(&self, field: &str) -> Option<UserId> {
        self.user_ids.get(field).copied()
    }

    fn set_user_id(&mut self, field: &str, value: Option<UserId>) {
        match value {
            Some(id) => self.user_ids.insert(field.to_string(), id),
            None => self.user_ids.remove(field),
        };
    }

    fn update_user_id(&mut self, field: &str, value: Option<UserId>) -> anyhow::Result<()> {
        if self.fail_persist {
            bail!("failed to persist {field}: storage unavailable");
        }
        self.set_user_id(field, value);
        self.persisted.insert(field.to_string(), value);
        self.persist_count += 1;
        Ok(())
    }
}

/// A user held in a [`MemoryUsers`] directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUser {
    /// Identifier
    pub id: UserId,
    /// Display name
    pub name: String,
}

impl UserRecord for MemoryUser {
    fn id(&self) -> UserId {
        self.id
    }
}

/// In-memory user directory with sequential ids starting at 1
#[derive(Debug, Clone, Default)]
pub struct MemoryUsers {
    users: BTreeMap<UserId, MemoryUser>,
    last_id: i64,
}

impl MemoryUsers {
    /// Empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user with the next free id
    pub fn create(&mut self, name: impl Into<String>) -> MemoryUser {
        self.last_id += 1;
        let user = MemoryUser {
            id: UserId(self.last_id),
            name: name.into(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    /// Number of users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for MemoryUsers {
    type User = MemoryUser;

    fn find_by_id(&self, id: UserId) -> Option<MemoryUser> {
        self.users.get(&id).cloned()
    }
}
