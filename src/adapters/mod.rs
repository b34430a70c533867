//! Adapter implementations for port traits
//!
//! - [`memory`] - in-memory records and user directory
//! - [`json`] - host records persisted as JSON files
//! - [`checkbox`] - bare-name getter/setter binding for forms

pub mod checkbox;
pub mod json;
pub mod memory;
