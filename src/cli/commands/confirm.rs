//! Confirm / unconfirm commands - the checkbox-style setter

use std::path::Path;

use confirmable::FlagOutcome;
use confirmable::adapters::json::JsonRecord;
use confirmable::core::models::UserId;
use confirmable::output::{OperationResult, OutputMode};

use super::load_registry;

/// Apply a checkbox value to an attribute and save the record
pub fn confirm(
    record_path: &Path,
    attribute: &str,
    value: &str,
    user: Option<i64>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let confirmable = load_registry(config)?;
    let mut record = JsonRecord::load(record_path)?;
    let actor = user.map(UserId);

    let outcome = confirmable.set_confirmed_flag(&mut record, attribute, value, &actor)?;
    record.save()?;

    let message = match outcome {
        FlagOutcome::Confirmed { .. } => format!("Confirmed {attribute}"),
        FlagOutcome::Unchanged => format!("{attribute} already confirmed, kept existing values"),
        FlagOutcome::Cleared => format!("Cleared {attribute}"),
    };
    let result = OperationResult {
        changed: outcome != FlagOutcome::Unchanged,
        message,
        status: confirmable.status(&record, attribute)?,
    };
    println!("{}", result.render(mode)?);
    Ok(())
}

/// Clear an attribute's confirmation and save the record
pub fn unconfirm(
    record_path: &Path,
    attribute: &str,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    confirm(record_path, attribute, "0", None, config, mode)
}
