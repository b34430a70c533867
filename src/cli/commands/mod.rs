//! Command implementations

mod confirm;
mod fields;
mod set_confirmer;
mod status;

use std::path::Path;

use confirmable::{Confirmable, ConfirmableConfig};

pub use confirm::{confirm, unconfirm};
pub use fields::fields;
pub use set_confirmer::set_confirmer;
pub use status::status;

/// Build the registry from `--config` or the default locations
fn load_registry(config: Option<&Path>) -> anyhow::Result<Confirmable> {
    let config = match config {
        Some(path) => ConfirmableConfig::load(path)?,
        None => ConfirmableConfig::discover()?,
    };
    Ok(config.to_confirmable()?)
}
