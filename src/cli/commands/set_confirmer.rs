//! Set-confirmer command - assign and persist the confirming user

use std::path::Path;

use confirmable::adapters::json::JsonRecord;
use confirmable::core::models::ConfirmerInput;
use confirmable::output::{OperationResult, OutputMode};
use serde_json::Value;

use super::load_registry;

/// Assign the confirmer from a JSON value
///
/// Text that is not valid JSON is treated as a string, which clears the
/// confirmer like any other non-integer input.
pub fn set_confirmer(
    record_path: &Path,
    attribute: &str,
    value: &str,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let confirmable = load_registry(config)?;
    let mut record = JsonRecord::load(record_path)?;

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    let who = ConfirmerInput::from_json(&value);
    confirmable.set_confirmer(&mut record, attribute, who)?;

    let message = match who.user_id() {
        Some(id) => format!("Set confirmer of {attribute} to {id}"),
        None => format!("Cleared confirmer of {attribute}"),
    };
    let result = OperationResult {
        changed: true,
        message,
        status: confirmable.status(&record, attribute)?,
    };
    println!("{}", result.render(mode)?);
    Ok(())
}
