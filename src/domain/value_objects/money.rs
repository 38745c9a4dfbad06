//! # Money Value Object
//!
//! Currency amount held at full precision.
//!
//! [`Money`] keeps the exact decimal result of the pricing formula. Display and
//! [`Money::rounded`] apply the two-decimal presentation rounding; arithmetic
//! never does.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::money::Money;
//! use rust_decimal::Decimal;
//!
//! let subtotal = Money::new(Decimal::new(133482, 3));
//! assert_eq!(subtotal.amount(), Decimal::new(133482, 3));
//! assert_eq!(subtotal.to_string(), "133.48");
//! ```

use crate::domain::value_objects::arithmetic::{
    ArithmeticResult, CURRENCY_SCALE, CheckedArithmetic, round_currency,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in the quoting currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps an exact amount.
    #[inline]
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to cents for presentation.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round_currency(self.0)
    }

    /// Returns true if the amount is exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum overflows.
    pub fn checked_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    /// Scales the amount by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    pub fn checked_mul(self, factor: Decimal) -> ArithmeticResult<Self> {
        self.0.safe_mul(factor).map(Self)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.rounded();
        rounded.rescale(CURRENCY_SCALE);
        write!(f, "{rounded}")
    }
}
