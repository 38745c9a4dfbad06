//! # System Ports
//!
//! Production [`Clock`] and [`EntropySource`] backed by the host.

use crate::domain::services::{Clock, EntropySource};
use crate::domain::value_objects::Timestamp;
use chrono::{Local, NaiveDate};

/// Wall clock; `today` is the date in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Base-36 digits from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl EntropySource for ThreadRngEntropy {
    fn next_base36(&self) -> u8 {
        // Modulo bias is 4 in 2^32.
        (rand::random::<u32>() % 36) as u8
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{TrackingNumber, TrackingPrefix};

    #[test]
    fn entropy_stays_in_range() {
        let entropy = ThreadRngEntropy;
        assert!((0..1_000).all(|_| entropy.next_base36() < 36));
    }

    #[test]
    fn clock_is_after_epoch() {
        assert!(SystemClock.now().timestamp_millis() > 0);
    }

    #[test]
    fn system_ports_produce_valid_tracking_number() {
        let number = crate::domain::services::generate_tracking_number(
            &TrackingPrefix::default(),
            &ThreadRngEntropy,
            &SystemClock,
        )
        .unwrap();
        assert!(TrackingNumber::parse(number.as_str()).is_ok());
    }
}
