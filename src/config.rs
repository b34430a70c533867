//! Confirmable configuration
//!
//! Declares which attributes a record type confirms, with what suffix, and
//! which user id stands in when no current actor resolves.
//!
//! ```toml
//! suffix = "_confirmed"
//! fallback_user_id = 1
//! attributes = ["recorded", "produced", "edited"]
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_SUFFIX, UserId};
use crate::core::services::{AttachOptions, Confirmable, DEFAULT_FALLBACK_USER_ID};
use crate::paths;

/// Configuration for one confirmable record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmableConfig {
    /// Suffix between attribute names and `_at`/`_by`
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// User id stored when no current actor resolves
    #[serde(default = "default_fallback_user_id")]
    pub fallback_user_id: UserId,
    /// Attribute names to attach
    #[serde(default)]
    pub attributes: Vec<String>,
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

const fn default_fallback_user_id() -> UserId {
    DEFAULT_FALLBACK_USER_ID
}

impl Default for ConfirmableConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            fallback_user_id: default_fallback_user_id(),
            attributes: Vec::new(),
        }
    }
}

impl ConfirmableConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load from the first default location that exists
    pub fn discover() -> anyhow::Result<Self> {
        Self::load(&Self::default_path())
    }

    /// Project config if present, otherwise the user-level config
    #[must_use]
    pub fn default_path() -> PathBuf {
        let local = paths::project_config();
        if local.exists() {
            local
        } else {
            paths::global_config()
        }
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the registry this configuration describes
    pub fn to_confirmable(&self) -> crate::Result<Confirmable> {
        let mut confirmable = Confirmable::new().with_fallback_user_id(self.fallback_user_id);
        confirmable.attach_with(
            self.attributes.iter().cloned(),
            &AttachOptions::with_suffix(self.suffix.clone()),
        )?;
        Ok(confirmable)
    }
}
