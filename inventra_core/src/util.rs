//! Recognizing the `"Null"` sentinel in free-text replies.

use crate::location::NULL;

/// True when `value` is the sentinel.
///
/// Model replies are free text, so a quoted or differently-cased `null`
/// counts too.
#[must_use]
pub fn is_null(value: &str) -> bool {
    let trimmed = value.trim().trim_matches(|c: char| c == '"' || c == '\'');
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL)
}
