//! Input validation shared by the record service.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::{ProxyError, Result};

/// ASCII letters, ASCII whitespace, apostrophe and hyphen, 1 to 50 characters.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\t\n\x0B\x0C\r '-]{1,50}$").expect("name pattern is valid")
});

/// Returns true if `value` is an acceptable name or search string.
pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Parses a record identifier, rejecting anything that is not a UUID.
pub fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| ProxyError::InvalidInput(format!("Invalid employee id provided: {}", value)))
}
