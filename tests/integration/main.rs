//! Integration tests for the confirmable CLI
//!
//! These tests run the real binary against JSON records in temp directories.
