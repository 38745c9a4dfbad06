//! # Ports
//!
//! Time and randomness consumed by the quote engine.
//!
//! The engine never reads the system clock or a global RNG itself. Callers
//! inject a [`Clock`] and an [`EntropySource`]; production wiring uses the
//! implementations in `infrastructure::system`, tests and reproducible callers
//! use [`FixedClock`] and [`SequenceEntropy`].

use crate::domain::value_objects::Timestamp;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of the current time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;

    /// Returns the caller's current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Source of random base-36 digits.
pub trait EntropySource: Send + Sync + fmt::Debug {
    /// Returns a digit in `0..36`.
    fn next_base36(&self) -> u8;
}

/// A clock frozen at one instant in a fixed UTC offset.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::services::{Clock, FixedClock};
///
/// let clock = FixedClock::from_ymd(2026, 10, 17).unwrap();
/// assert_eq!(clock.today().to_string(), "2026-10-17");
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`; `today` is its date in its offset.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Creates a clock at noon UTC on the given date.
    ///
    /// Returns `None` for an invalid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let utc = FixedOffset::east_opt(0)?;
        utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .map(Self::new)
    }

    /// Creates a clock at Unix `millis`, observed from `offset_secs` east of UTC.
    ///
    /// Returns `None` if either value is out of range.
    #[must_use]
    pub fn from_millis(millis: i64, offset_secs: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(offset_secs)?;
        let utc = Utc.timestamp_millis_opt(millis).single()?;
        Some(Self::new(utc.with_timezone(&offset)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(self.instant.with_timezone(&Utc))
    }

    fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }
}

/// Entropy that replays a fixed sequence of digits, cycling at the end.
///
/// An empty sequence always yields `0`.
#[derive(Debug, Default)]
pub struct SequenceEntropy {
    digits: Vec<u8>,
    cursor: AtomicUsize,
}

impl SequenceEntropy {
    /// Creates a source replaying `digits`, each reduced modulo 36.
    #[must_use]
    pub fn new(digits: Vec<u8>) -> Self {
        Self {
            digits: digits.into_iter().map(|d| d % 36).collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl EntropySource for SequenceEntropy {
    fn next_base36(&self) -> u8 {
        if self.digits.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.digits.len();
        self.digits.get(position).copied().unwrap_or_default()
    }
}
