//! Input validation helpers
//!
//! Text length constants and checks for values the registry itself
//! guards. Client name and phone are left to the calling layer.

use shared::AppError;

/// Table names
pub const MAX_NAME_LEN: usize = 200;

/// Largest table the floor plan allows
pub const MAX_TABLE_SEATS: u32 = 100;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a table's seat capacity (1..=MAX_TABLE_SEATS)
pub fn validate_seats(seats: u32) -> Result<(), AppError> {
    if seats == 0 || seats > MAX_TABLE_SEATS {
        return Err(AppError::out_of_range(format!(
            "seats must be between 1 and {MAX_TABLE_SEATS}, got {seats}"
        ))
        .with_detail("field", "seats"));
    }
    Ok(())
}
