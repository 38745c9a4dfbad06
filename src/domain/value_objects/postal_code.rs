//! # Postal Codes
//!
//! Basic postal code format checks for the countries the service ships to.
//!
//! Only US, CA and UK formats are known. Codes for any other country are
//! accepted as-is.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::postal_code::validate_postal_code;
//!
//! assert!(validate_postal_code("94105-1234", "US"));
//! assert!(validate_postal_code("K1A 0B1", "CA"));
//! assert!(!validate_postal_code("ABCDE", "US"));
//! assert!(validate_postal_code("anything", "DE"));
//! ```

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static US_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("static regex should not panic")
});

#[allow(clippy::expect_used)]
static CA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9]$").expect("static regex should not panic")
});

#[allow(clippy::expect_used)]
static UK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]? [0-9][A-Z]{2}$").expect("static regex should not panic")
});

/// Returns the format pattern for `country`, if one is known.
fn pattern_for(country: &str) -> Option<&'static Regex> {
    match country {
        "US" => Some(&*US_PATTERN),
        "CA" => Some(&*CA_PATTERN),
        "UK" => Some(&*UK_PATTERN),
        _ => None,
    }
}

/// Checks `code` against the postal format of `country`.
///
/// Country codes are matched exactly (`"US"`, `"CA"`, `"UK"`). Unknown
/// countries always validate.
#[must_use]
pub fn validate_postal_code(code: &str, country: &str) -> bool {
    pattern_for(country).is_none_or(|pattern| pattern.is_match(code))
}
