//! Status command - show confirmation state of a record

use std::path::Path;

use confirmable::adapters::json::JsonRecord;
use confirmable::output::{OutputMode, StatusReport};

use super::load_registry;

/// Show the status of one or every attribute
pub fn status(
    record_path: &Path,
    attribute: Option<&str>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let confirmable = load_registry(config)?;
    let record = JsonRecord::load(record_path)?;

    let attributes = match attribute {
        Some(name) => vec![confirmable.status(&record, name)?],
        None => confirmable.statuses(&record),
    };

    let report = StatusReport {
        record: record_path.display().to_string(),
        attributes,
    };
    println!("{}", report.render(mode)?);
    Ok(())
}
