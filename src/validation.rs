use chrono::NaiveDate;

use crate::error::{ContactError, ContactResult};

/// Strips every non-digit character from a phone number.
/// Accepts the result only if exactly 10 digits remain.
pub fn phone_digits(value: &str) -> ContactResult<String> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        Ok(digits)
    } else {
        Err(ContactError::InvalidPhone)
    }
}

/// Parses a birthday as a real `YYYY-MM-DD` calendar date.
pub fn birthday_date(value: &str) -> ContactResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ContactError::InvalidBirthday)
}
