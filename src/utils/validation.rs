use crate::utils::error::{Result, ValidationError, ValidationResult};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn has_at_sign(value: &str) -> bool {
    value.contains('@')
}

/// Inclusive range check. Unordered values (NaN) are never within range.
pub fn is_within<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

pub fn is_non_negative(value: i64) -> bool {
    value >= 0
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> ValidationResult<()> {
    if !is_non_blank(value) {
        return Err(ValidationError::new(
            field_name,
            value,
            "must be a non-empty string",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> ValidationResult<()> {
    if !has_at_sign(value) {
        return Err(ValidationError::new(field_name, value, "must contain '@'"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> ValidationResult<()> {
    if !is_within(value, min, max) {
        return Err(ValidationError::new(
            field_name,
            value,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Accepts a signed count and narrows it to `u32`.
pub fn validate_count(field_name: &str, value: i64) -> ValidationResult<u32> {
    if !is_non_negative(value) {
        return Err(ValidationError::new(
            field_name,
            value,
            "must be a non-negative integer",
        ));
    }
    u32::try_from(value).map_err(|_| {
        ValidationError::new(field_name, value, format!("must not exceed {}", u32::MAX))
    })
}

/// Accepts a signed value and narrows it to `u8` once it lies in `[min, max]`.
pub fn validate_small_range(
    field_name: &str,
    value: i64,
    min: u8,
    max: u8,
) -> ValidationResult<u8> {
    validate_range(field_name, value, i64::from(min), i64::from(max))?;
    u8::try_from(value).map_err(|_| {
        ValidationError::new(field_name, value, format!("must be between {} and {}", min, max))
    })
}
