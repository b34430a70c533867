//! A host record stored as a flat JSON object on disk
//!
//! ```json
//! {
//!   "id": 42,
//!   "recorded_confirmed_at": "2024-05-10T08:00:00+00:00",
//!   "recorded_confirmed_by": 7
//! }
//! ```
//!
//! Timestamps are RFC 3339 strings, user references are integers, and an
//! absent value is `null` (or a missing key). Fields this crate does not
//! know about are preserved untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::core::models::{UserId, parse_timestamp};
use crate::core::ports::FieldStore;

/// Record loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonRecord {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl JsonRecord {
    /// Load a record, starting empty when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let fields = if path.exists() {
            read_object(&path)?
        } else {
            Map::new()
        };
        Ok(Self { path, fields })
    }

    /// File backing this record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw JSON fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Write every in-memory field to disk
    pub fn save(&self) -> anyhow::Result<()> {
        write_object(&self.path, &self.fields)
    }
}

impl FieldStore for JsonRecord {
    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.fields.get(field).and_then(Value::as_str).and_then(parse_timestamp)
    }

    fn set_timestamp(&mut self, field: &str, value: Option<DateTime<Utc>>) {
        let value = value.map_or(Value::Null, |at| Value::String(at.to_rfc3339()));
        self.fields.insert(field.to_string(), value);
    }

    fn user_id(&self, field: &str) -> Option<UserId> {
        self.fields.get(field).and_then(Value::as_i64).map(UserId)
    }

    fn set_user_id(&mut self, field: &str, value: Option<UserId>) {
        self.fields.insert(field.to_string(), user_id_value(value));
    }

    fn update_user_id(&mut self, field: &str, value: Option<UserId>) -> anyhow::Result<()> {
        // Persist only this field on top of what is already on disk
        let mut on_disk = if self.path.exists() {
            read_object(&self.path)?
        } else {
            Map::new()
        };
        on_disk.insert(field.to_string(), user_id_value(value));
        write_object(&self.path, &on_disk)?;

        self.set_user_id(field, value);
        log::debug!("persisted {field} to {}", self.path.display());
        Ok(())
    }
}

fn user_id_value(value: Option<UserId>) -> Value {
    value.map_or(Value::Null, |id| Value::from(id.get()))
}

fn read_object(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?
    {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("{} does not contain a JSON object", path.display()),
    }
}

fn write_object(path: &Path, fields: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(fields)?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
