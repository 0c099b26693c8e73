//! Unified error system for the reservation engine
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 70xx-74xx: Table errors
//! - 75xx-79xx: Booking errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::table_occupied("T1");
//! assert_eq!(err.code, ErrorCode::TableOccupied);
//!
//! let err = AppError::validation("Missing table name").with_detail("field", "name");
//! assert_eq!(err.detail_str("field"), Some("name"));
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
