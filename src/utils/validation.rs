use crate::utils::error::{NotebookError, Result};
use regex::Regex;
use std::sync::LazyLock;

static BIRTHDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only; `\d` would also accept other Unicode digits.
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("birthdate pattern is valid")
});

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field(field_name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(NotebookError::EmptyField { field: field_name });
    }
    Ok(())
}

/// Pattern check only: "99-99-9999" is accepted.
pub fn is_valid_birthdate(value: &str) -> bool {
    BIRTHDATE_PATTERN.is_match(value)
}

pub fn validate_birthdate(value: &str) -> Result<()> {
    if !is_valid_birthdate(value) {
        return Err(NotebookError::InvalidDateFormat {
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(NotebookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
