//! Centralized path definitions for confirmable
//!
//! ```text
//! project/
//! └── .confirmable.toml          # Project config (preferred when present)
//!
//! ~/.config/confirmable/
//! └── config.toml                # User-level config
//! ```

use std::path::PathBuf;

/// Project config file name
pub const PROJECT_CONFIG_FILE: &str = ".confirmable.toml";

/// Project config in the working directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG_FILE)
}

/// User-level config directory (`~/.config/confirmable`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("confirmable")
}

/// User-level config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join("config.toml")
}
