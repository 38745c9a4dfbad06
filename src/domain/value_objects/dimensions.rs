//! # Dimensions Value Object
//!
//! Package dimensions entered as `LxWxH` whole centimetres, plus the
//! volumetric weight derived from them.
//!
//! Dimensions are informational. The quote is priced on actual weight only.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::dimensions::Dimensions;
//! use rust_decimal::Decimal;
//!
//! let dims: Dimensions = "30x20x15".parse().unwrap();
//! assert_eq!(dims.volume_cm3(), 9000);
//! assert_eq!(dims.default_dimensional_weight().unwrap(), Decimal::new(18, 1));
//!
//! assert!("30x20".parse::<Dimensions>().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Volumetric divisor used by carriers when none is given (cm³ per kg).
pub const DEFAULT_DIMENSIONAL_DIVISOR: u32 = 5000;

/// Message shown when dimensions do not match the `LxWxH` format.
pub const DIMENSIONS_FORMAT_HINT: &str =
    "Please enter dimensions in format: LxWxH (e.g., 30x20x15)";

#[allow(clippy::expect_used)]
static DIMENSIONS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)x([0-9]+)x([0-9]+)$").expect("static regex should not panic")
});

/// Returns true if `input` matches the `LxWxH` pattern.
#[must_use]
pub fn is_valid_dimensions(input: &str) -> bool {
    DIMENSIONS_PATTERN.is_match(input)
}

/// Package dimensions in centimetres.
///
/// Serialized as the `LxWxH` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dimensions {
    length: u32,
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Creates dimensions from explicit sides.
    #[must_use]
    pub const fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Length in centimetres.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Width in centimetres.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in centimetres.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Volume in cubic centimetres.
    #[must_use]
    pub const fn volume_cm3(&self) -> u128 {
        self.length as u128 * self.width as u128 * self.height as u128
    }

    /// Volumetric weight in kilograms: `L * W * H / divisor`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `divisor` is zero or the volume
    /// cannot be represented.
    pub fn dimensional_weight(&self, divisor: u32) -> DomainResult<Decimal> {
        if divisor == 0 {
            return Err(DomainError::invalid_input(
                "divisor",
                "dimensional divisor must be positive",
            ));
        }
        let too_large = || DomainError::invalid_input("dimensions", "volume too large");
        let volume = i128::try_from(self.volume_cm3()).map_err(|_| too_large())?;
        let volume = Decimal::try_from_i128_with_scale(volume, 0).map_err(|_| too_large())?;
        Ok(volume.safe_div(Decimal::from(divisor))?)
    }

    /// Volumetric weight with [`DEFAULT_DIMENSIONAL_DIVISOR`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the volume cannot be represented.
    pub fn default_dimensional_weight(&self) -> DomainResult<Decimal> {
        self.dimensional_weight(DEFAULT_DIMENSIONAL_DIVISOR)
    }
}

impl FromStr for Dimensions {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_input("dimensions", DIMENSIONS_FORMAT_HINT);
        let captures = DIMENSIONS_PATTERN.captures(s).ok_or_else(invalid)?;
        let side = |index: usize| -> DomainResult<u32> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(invalid)
        };
        Ok(Self::new(side(1)?, side(2)?, side(3)?))
    }
}

impl TryFrom<String> for Dimensions {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dimensions> for String {
    fn from(dims: Dimensions) -> Self {
        dims.to_string()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn parses_valid_format() {
            let dims: Dimensions = "120x80x60".parse().unwrap();
            assert_eq!(dims, Dimensions::new(120, 80, 60));
        }

        #[test]
        fn rejects_spaces() {
            assert!("30 x 20 x 15".parse::<Dimensions>().is_err());
        }

        #[test]
        fn rejects_uppercase_separator() {
            assert!("30X20X15".parse::<Dimensions>().is_err());
        }

        #[test]
        fn rejects_decimals() {
            assert!("30.5x20x15".parse::<Dimensions>().is_err());
        }

        #[test]
        fn rejects_non_ascii_digits() {
            assert!("\u{0663}\u{0660}x20x15".parse::<Dimensions>().is_err());
            assert!(!is_valid_dimensions("30x２０x15"));
        }

        #[test]
        fn rejects_side_overflow() {
            assert!("99999999999x1x1".parse::<Dimensions>().is_err());
        }

        #[test]
        fn error_carries_format_hint() {
            let err = "abc".parse::<Dimensions>().unwrap_err();
            assert_eq!(err.field(), "dimensions");
            assert!(err.to_string().contains("LxWxH"));
        }

        #[test]
        fn pattern_check() {
            assert!(is_valid_dimensions("1x2x3"));
            assert!(!is_valid_dimensions(""));
            assert!(!is_valid_dimensions("1x2x3x4"));
        }

        #[test]
        fn serde_as_string() {
            let dims = Dimensions::new(30, 20, 15);
            assert_eq!(serde_json::to_string(&dims).unwrap(), "\"30x20x15\"");
            assert!(serde_json::from_str::<Dimensions>("\"30x20\"").is_err());
        }

        #[test]
        fn display_roundtrip() {
            let dims = Dimensions::new(30, 20, 15);
            assert_eq!(dims.to_string().parse::<Dimensions>().unwrap(), dims);
        }
    }

    mod dimensional_weight {
        use super::*;

        #[test]
        fn uses_divisor() {
            let dims = Dimensions::new(50, 40, 30);
            assert_eq!(dims.dimensional_weight(6000).unwrap(), Decimal::new(10, 0));
        }

        #[test]
        fn default_divisor_is_5000() {
            let dims = Dimensions::new(100, 50, 50);
            assert_eq!(
                dims.default_dimensional_weight().unwrap(),
                Decimal::new(50, 0)
            );
        }

        #[test]
        fn zero_divisor_rejected() {
            let err = Dimensions::new(1, 1, 1).dimensional_weight(0).unwrap_err();
            assert_eq!(err.field(), "divisor");
        }

        #[test]
        fn zero_side_gives_zero() {
            assert_eq!(
                Dimensions::new(0, 10, 10)
                    .default_dimensional_weight()
                    .unwrap(),
                Decimal::ZERO
            );
        }
    }
}
