//! Shared types for the table reservation engine
//!
//! Domain entities (tables, bookings, status read models) and the unified
//! error types used by the engine and its presentation layer.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Booking, OccupancySummary, StatusEntry, Table, TableStatus};
pub use serde::{Deserialize, Serialize};
