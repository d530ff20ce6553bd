//! Text field rules shared by every user-supplied string
//!
//! The record files store one field per line with no escaping, so a value
//! must be present and must not contain a line break.

use crate::error::{LibraryError, LibraryResult};

/// Validate a single-line, non-blank field and return it owned.
///
/// Surrounding whitespace is kept: the record format stores text verbatim.
pub fn require_line(field: &'static str, value: &str) -> LibraryResult<String> {
    if value.trim().is_empty() {
        return Err(LibraryError::MissingField { field });
    }
    if value.contains(['\n', '\r']) {
        return Err(LibraryError::MultilineField { field });
    }
    Ok(value.to_string())
}
