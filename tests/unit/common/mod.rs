//! Common test utilities
//!
//! - `fixtures.rs` - Registries, records and clocks shared across tests
