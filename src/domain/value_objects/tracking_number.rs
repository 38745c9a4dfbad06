//! # Tracking Number
//!
//! Display token identifying a quote.
//!
//! Format: two-letter prefix, the last eight digits of the Unix epoch
//! milliseconds, and four base-36 characters:
//!
//! ```text
//! LC 67200123 7QZ0
//! ^^ ^^^^^^^^ ^^^^
//! |  |        +-- random, [A-Z0-9]{4}
//! |  +----------- epoch millis mod 10^8, zero padded
//! +-------------- prefix, [A-Z]{2}
//! ```
//!
//! Uniqueness is probabilistic and never checked.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::tracking_number::{TrackingNumber, TrackingPrefix};
//!
//! let prefix = TrackingPrefix::new("LC").unwrap();
//! let number = TrackingNumber::from_parts(&prefix, 1_704_067_200_123, [7, 26, 35, 0]).unwrap();
//! assert_eq!(number.as_str(), "LC672001237QZ0");
//! assert!(TrackingNumber::parse(number.as_str()).is_ok());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Total length of a tracking number.
pub const TRACKING_NUMBER_LEN: usize = 14;

/// Number of random base-36 characters at the end.
pub const RANDOM_SUFFIX_LEN: usize = 4;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "LC";

const TIMESTAMP_MODULUS: i64 = 100_000_000;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[allow(clippy::expect_used)]
static TRACKING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{8}[A-Z0-9]{4}$").expect("static regex should not panic")
});

/// Maps a base-36 digit to its uppercase character.
///
/// Values of 36 and above wrap around.
#[must_use]
pub fn base36_char(digit: u8) -> char {
    let index = usize::from(digit % 36);
    BASE36_ALPHABET
        .get(index)
        .map_or('0', |&byte| char::from(byte))
}

/// Two uppercase ASCII letters leading every tracking number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingPrefix(String);

impl TrackingPrefix {
    /// Creates a prefix.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` unless `prefix` is exactly two
    /// uppercase ASCII letters.
    pub fn new(prefix: impl Into<String>) -> DomainResult<Self> {
        let prefix = prefix.into();
        if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::invalid_input(
                "tracking_prefix",
                format!("'{prefix}' must be two uppercase letters"),
            ));
        }
        Ok(Self(prefix))
    }

    /// Returns the prefix text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TrackingPrefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl TryFrom<String> for TrackingPrefix {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackingPrefix> for String {
    fn from(prefix: TrackingPrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for TrackingPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shipment tracking number.
///
/// # Invariants
///
/// - Matches `^[A-Z]{2}[0-9]{8}[A-Z0-9]{4}$` (ASCII only, 14 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Assembles a tracking number from its parts.
    ///
    /// `epoch_millis` is reduced to its last eight decimal digits. Each entry in
    /// `suffix` is a base-36 digit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `epoch_millis` is negative.
    pub fn from_parts(
        prefix: &TrackingPrefix,
        epoch_millis: i64,
        suffix: [u8; RANDOM_SUFFIX_LEN],
    ) -> DomainResult<Self> {
        if epoch_millis < 0 {
            return Err(DomainError::invalid_input(
                "epoch_millis",
                "clock reported a time before the Unix epoch",
            ));
        }
        let mut value = String::with_capacity(TRACKING_NUMBER_LEN);
        value.push_str(prefix.as_str());
        value.push_str(&format!("{:08}", epoch_millis % TIMESTAMP_MODULUS));
        value.extend(suffix.iter().map(|&digit| base36_char(digit)));
        Ok(Self(value))
    }

    /// Parses and validates an existing tracking number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `value` does not have the
    /// tracking number shape.
    pub fn parse(value: &str) -> DomainResult<Self> {
        if !TRACKING_PATTERN.is_match(value) {
            return Err(DomainError::invalid_input(
                "tracking_number",
                format!("'{value}' is not a valid tracking number"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the tracking number text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two-letter prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0.get(..2).unwrap_or_default()
    }

    /// Returns the eight timestamp digits.
    #[must_use]
    pub fn timestamp_digits(&self) -> &str {
        self.0.get(2..10).unwrap_or_default()
    }

    /// Returns the four random characters.
    #[must_use]
    pub fn random_suffix(&self) -> &str {
        self.0.get(10..).unwrap_or_default()
    }
}

impl FromStr for TrackingNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TrackingNumber> for String {
    fn from(number: TrackingNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
