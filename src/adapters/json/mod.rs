//! JSON record file storage
//!
//! Implements `FieldStore` over a record persisted as one JSON object.

mod store;

pub use store::JsonRecord;
