//! Core domain logic for confirmable attributes
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (attribute descriptor, flag values, user ids)
//! - `services/` - Confirmation policy and the attach registry
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
