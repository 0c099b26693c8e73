//! Unified error codes for the reservation engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Table errors (70xx-74xx)
//! - 75xx: Booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a presentation layer
/// can branch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Table name already exists
    TableNameExists = 7004,

    // ==================== 75xx: Booking ====================
    /// Booking not found
    BookingNotFound = 7501,
    /// Booking end time is not after its start time
    InvalidBookingWindow = 7502,

    // ==================== 9xxx: System ====================
    /// Internal error (broken registry invariant)
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableNameExists => "Table name already exists",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidBookingWindow => "Booking must end after it starts",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7004 => Ok(ErrorCode::TableNameExists),

            // Booking
            7501 => Ok(ErrorCode::BookingNotFound),
            7502 => Ok(ErrorCode::InvalidBookingWindow),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
