//! Custom validation rules for compound field constraints.

use std::borrow::Cow;

use validator::ValidationError;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Required, digits only, 10 or 11 of them.
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Phone number is required"));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("digits", "Phone number must be only digits"));
    }
    if !(10..=11).contains(&value.len()) {
        return Err(invalid("length", "Phone number must be 10 or 11 digits"));
    }
    Ok(())
}

/// Required and exactly two characters. Real ISO codes are not checked.
pub fn country_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Country code is required"));
    }
    if value.chars().count() != 2 {
        return Err(invalid("length", "Country code must be 2 characters"));
    }
    Ok(())
}
