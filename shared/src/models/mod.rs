//! Data models
//!
//! Entities and read models shared between the reservation engine and
//! whatever presentation layer renders them.

pub mod booking;
pub mod dining_table;

// Re-exports
pub use booking::*;
pub use dining_table::*;
