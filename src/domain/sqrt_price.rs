//! Square root of a decimal-adjusted price.

use core::fmt;

use crate::error::RebalanceError;

/// The square root of a decimal-adjusted [`Price`](super::Price).
///
/// Liquidity is linear in the reciprocal or product of sqrt-prices, not
/// in price itself, so the liquidity formulas take their boundaries in
/// this representation. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SqrtPrice(f64);

impl SqrtPrice {
    /// Creates a new `SqrtPrice` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidPrice`] if the value is not
    /// finite or not strictly positive.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(RebalanceError::InvalidPrice(
                "sqrt price must be finite and positive",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SqrtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
