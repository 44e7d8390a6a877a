use chrono::NaiveDate;

use crate::server::error::booking::BookingError;

/// Normalizes a chat platform user ID for storage and comparison.
///
/// Trims surrounding whitespace and drops a fractional suffix, since some clients
/// deliver numeric IDs as floats (`"123.0"`).
///
/// # Arguments
/// - `value` - Raw platform ID as received from the client
///
/// # Returns
/// - `String` - Normalized ID, empty if the input held no ID
pub fn normalize_platform_id(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.split_once('.') {
        Some((whole, _)) => whole.to_string(),
        None => trimmed.to_string(),
    }
}

/// Parses a booking date in strict `YYYY-MM-DD` form.
///
/// # Arguments
/// - `value` - The date string from a path segment or request body
///
/// # Returns
/// - `Ok(NaiveDate)` - Valid calendar date
/// - `Err(BookingError::InvalidDate)` - Wrong shape or not a real date
pub fn parse_booking_date(value: &str) -> Result<NaiveDate, BookingError> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(BookingError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(value.to_string()))
}
