//! Output formatting for human and JSON modes
//!
//! Command results are plain serialisable structs rendered either as
//! coloured text or as JSON documents.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::ConfirmationStatus;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Statuses of one record
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Record file
    pub record: String,
    /// One entry per attribute
    pub attributes: Vec<ConfirmationStatus>,
}

/// Result of a state-changing command
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the record changed
    pub changed: bool,
    /// Human-readable message
    pub message: String,
    /// Status after the operation
    pub status: ConfirmationStatus,
}

/// Backing fields of the configured attributes
#[derive(Debug, Serialize)]
pub struct FieldList {
    /// Field and alias names
    pub fields: Vec<String>,
}

impl StatusReport {
    /// Render in the given mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<String> {
        if mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        let mut out = format!("{}\n", self.record.bold());
        for status in &self.attributes {
            out.push_str(&format!("  {}\n", status_line(status)));
        }
        Ok(out.trim_end().to_string())
    }
}

impl OperationResult {
    /// Render in the given mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<String> {
        if mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        Ok(format!("{}\n  {}", self.message, status_line(&self.status)))
    }
}

impl FieldList {
    /// Render in the given mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<String> {
        if mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        Ok(self.fields.join("\n"))
    }
}

fn status_line(status: &ConfirmationStatus) -> String {
    if status.confirmed {
        let at = status
            .confirmed_at
            .map_or_else(String::new, |at| at.to_rfc3339());
        let by = status
            .confirmed_by
            .map_or_else(String::new, |by| by.to_string());
        format!("{} {} at {at} by {by}", "✓".green(), status.name)
    } else {
        format!("{} {} unconfirmed", "✗".red(), status.name)
    }
}
