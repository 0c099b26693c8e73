//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 7000-7499: Table errors
/// - 7500-7999: Booking errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Table errors (70xx-74xx)
    Table,
    /// Booking errors (75xx-79xx)
    Booking,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            7000..7500 => Self::Table,
            7500..8000 => Self::Booking,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Table => "table",
            Self::Booking => "booking",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(7499), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(7500), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::ValidationFailed.category(),
            ErrorCategory::General
        );
        assert_eq!(ErrorCode::TableOccupied.category(), ErrorCategory::Table);
        assert_eq!(ErrorCode::TableNameExists.category(), ErrorCategory::Table);
        assert_eq!(
            ErrorCode::InvalidBookingWindow.category(),
            ErrorCategory::Booking
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Booking).unwrap();
        assert_eq!(json, "\"booking\"");

        let category: ErrorCategory = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(category, ErrorCategory::Table);
        assert_eq!(category.name(), "table");
    }
}
