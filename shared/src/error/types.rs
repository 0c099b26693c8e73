//! Application error type

use super::codes::ErrorCode;
use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Expected domain failures (unknown table, occupied table, duplicate
/// name) travel as this type; the caller branches on [`AppError::code`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending table, field, time window)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry as a string
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.as_ref()?.get(key)?.as_str()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an out of range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    // ==================== Domain constructors ====================

    /// `<default message>: <table>` with the table recorded as a detail
    fn for_table(code: ErrorCode, table: &str) -> Self {
        Self::with_message(code, format!("{}: {}", code.message(), table))
            .with_detail("table", table)
    }

    pub fn table_not_found(table: &str) -> Self {
        Self::for_table(ErrorCode::TableNotFound, table)
    }

    pub fn table_occupied(table: &str) -> Self {
        Self::for_table(ErrorCode::TableOccupied, table)
    }

    pub fn table_name_exists(table: &str) -> Self {
        Self::with_message(
            ErrorCode::TableNameExists,
            format!("A table named '{}' already exists", table),
        )
        .with_detail("table", table)
    }

    pub fn booking_not_found(table: &str) -> Self {
        Self::for_table(ErrorCode::BookingNotFound, table)
    }

    pub fn invalid_booking_window(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_message(
            ErrorCode::InvalidBookingWindow,
            format!("Booking end {} is not after start {}", end, start),
        )
        .with_detail("start_time", start.to_string())
        .with_detail("end_time", end.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
