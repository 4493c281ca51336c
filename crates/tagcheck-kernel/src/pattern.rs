//! The canonical tag value format.
//!
//! A well-formed value is one or more runs of `[a-z0-9_]`, optionally joined
//! by `;` with spaces allowed around the semicolon: `residential`,
//! `yes; no`, `bus;tram`. Anything else (capitals, hyphens, colons, spaces
//! inside a run, empty) is malformed.

use std::sync::LazyLock;

use regex::Regex;

/// Full-string pattern for a well-formed tag value.
pub const VALID_PATTERN: &str = r"^[a-z0-9_]+( *; *[a-z0-9_]+)*$";

#[allow(clippy::expect_used)]
static VALID_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VALID_PATTERN).expect("VALID_PATTERN is a valid regex"));

/// True if `value` follows the canonical format in its entirety.
pub fn is_valid_value(value: &str) -> bool {
    VALID_VALUE.is_match(value)
}
