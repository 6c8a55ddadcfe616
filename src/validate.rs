use regex::Regex;
use std::sync::LazyLock;

use crate::{Error, Result};

/// Regex for a plausible email address.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("fail to create a regex for the email address")
});

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Reject an empty `value` with "`field` can't be blank"
pub(crate) fn not_blank(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::bad_request(format!("{field} can't be blank")))
    } else {
        Ok(())
    }
}

/// Email rule used at registration
pub(crate) fn email(value: &str) -> Result<()> {
    not_blank("email", value)?;
    if is_email(value) {
        Ok(())
    } else {
        Err(Error::bad_request("email is invalid"))
    }
}

/// Empty strings mean "leave unchanged"
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
