//! Fields command - list backing fields

use std::path::Path;

use confirmable::output::{FieldList, OutputMode};

use super::load_registry;

/// List backing fields and aliases of the configured attributes
pub fn fields(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let confirmable = load_registry(config)?;
    let list = FieldList {
        fields: confirmable.field_names(),
    };
    println!("{}", list.render(mode)?);
    Ok(())
}
