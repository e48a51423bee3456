//! Client-side checks run before a payload is sent.
//!
//! These mirror the rules the admin forms enforce; the server remains the
//! authority and may reject payloads that pass here.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ApiError, Result};

/// Implemented by every create/update payload.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Payloads that have no client-side rules.
impl Validate for serde_json::Value {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ApiError {
    ApiError::Validation(msg.into())
}

pub fn min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    let len = value.trim().chars().count();
    if len < min {
        if min == 1 {
            return Err(invalid(format!("{} is required", field)));
        }
        return Err(invalid(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

/// Same as [`min_chars`], applied only when an update sets the field.
pub fn min_chars_opt(field: &str, value: &Option<String>, min: usize) -> Result<()> {
    match value {
        Some(v) => min_chars(field, v, min),
        None => Ok(()),
    }
}

/// Absent and empty values are accepted; anything else must be an absolute URL.
pub fn optional_url(field: &str, value: &Option<String>) -> Result<()> {
    match value.as_deref() {
        None | Some("") => Ok(()),
        Some(v) => url::Url::parse(v)
            .map(|_| ())
            .map_err(|_| invalid(format!("{} must be a valid URL", field))),
    }
}

pub fn email(field: &str, value: &str) -> Result<()> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    });
    if re.is_match(value.trim()) {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a valid email address", field)))
    }
}

pub fn in_range(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

pub fn non_empty_list<T>(field: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(invalid(format!("{} must contain at least one entry", field)));
    }
    Ok(())
}

/// An entry that is still current cannot have an end date, and an end date
/// never precedes the start.
pub fn date_span(
    start: Option<&DateTime<Utc>>,
    end: Option<&DateTime<Utc>>,
    is_current: Option<bool>,
) -> Result<()> {
    if is_current == Some(true) && end.is_some() {
        return Err(invalid("endDate must be empty while isCurrent is set"));
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(invalid("endDate must not be before startDate"));
        }
    }
    Ok(())
}

/// At least 8 ASCII letters or digits, with one uppercase, one lowercase and one digit.
pub fn password_strength(value: &str) -> Result<()> {
    if value.chars().count() < 8 {
        return Err(invalid("Password must be at least 8 characters"));
    }
    let alphanumeric = value.chars().all(|c| c.is_ascii_alphanumeric());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(alphanumeric && has_upper && has_lower && has_digit) {
        return Err(invalid(
            "Password must contain at least one uppercase letter, one lowercase letter, and one number",
        ));
    }
    Ok(())
}
