//! Liquidity units for concentrated positions.

use core::fmt;

use crate::error::RebalanceError;

/// Virtual reserve depth of a concentrated position.
///
/// This is distinct from [`RawAmount`](super::RawAmount) because it
/// measures depth over a price range, not a quantity of a specific
/// token. The same liquidity value, combined with a range, determines
/// both token amounts unambiguously. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Liquidity(f64);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Liquidity` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidLiquidity`] if the value is
    /// negative, NaN, or infinite. Rejecting infinity here is what keeps
    /// a collapsed range from silently producing unbounded liquidity.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RebalanceError::InvalidLiquidity(
                "liquidity must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns the smaller of two liquidity values.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let Ok(liq) = Liquidity::new(1000.5) else {
            panic!("expected Ok");
        };
        assert!((liq.get() - 1000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_rejects_negative() {
        assert!(Liquidity::new(-1.0).is_err());
    }

    #[test]
    fn new_rejects_infinity() {
        assert_eq!(
            Liquidity::new(f64::INFINITY),
            Err(RebalanceError::InvalidLiquidity(
                "liquidity must be finite and non-negative"
            ))
        );
    }

    #[test]
    fn min_picks_smaller() {
        let Ok(a) = Liquidity::new(1.0) else {
            panic!("expected Ok");
        };
        let Ok(b) = Liquidity::new(2.0) else {
            panic!("expected Ok");
        };
        assert_eq!(a.min(b), a);
        assert_eq!(b.min(a), a);
    }

    #[test]
    fn zero_constant() {
        assert!((Liquidity::ZERO.get()).abs() < f64::EPSILON);
    }
}
