//! Exchange rate between the two pool tokens.

use core::fmt;

use super::SqrtPrice;
use crate::error::RebalanceError;

/// Exchange rate between the two pool tokens as a dimensionless ratio.
///
/// Wraps an `f64` value that must be finite and non-negative. A `Price`
/// produced by the tick conversion layer is always decimal-adjusted, i.e.
/// expressed at the tokens' native precision rather than in raw curve
/// units.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::Price;
///
/// let price = Price::new(1.5);
/// assert!(price.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidPrice`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RebalanceError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(RebalanceError::DivisionByZero(
                "cannot invert a zero price",
            ));
        }
        Self::new(1.0 / self.0)
    }

    /// Computes the square root of this price.
    ///
    /// The square root of a decimal-adjusted price is the natural
    /// variable of the liquidity formulas, so this is the only sanctioned
    /// way to obtain a [`SqrtPrice`].
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidPrice`] if the price is zero:
    /// a zero sqrt-price cannot bound a liquidity interval.
    pub fn sqrt(&self) -> crate::error::Result<SqrtPrice> {
        if self.0 <= 0.0 {
            return Err(RebalanceError::InvalidPrice(
                "sqrt requires a strictly positive price",
            ));
        }
        SqrtPrice::new(self.0.sqrt())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
