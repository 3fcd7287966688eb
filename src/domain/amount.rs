//! Raw token amount in the smallest on-chain unit.

use core::fmt;

use super::Decimals;
use crate::error::RebalanceError;

/// A raw token amount in the smallest unit (wei, satoshi, or equivalent).
///
/// This is the only numeric representation that crosses the system
/// boundary: inputs arrive as raw integers and the solved rebalance
/// amount leaves as one. All `u128` values are valid amounts, which
/// covers every realistic token supply while staying inside the uint256
/// range required by the output word.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::RawAmount;
///
/// let amount = RawAmount::parse("5000000000", "amount")?;
/// assert_eq!(amount.get(), 5_000_000_000);
/// # Ok::<(), range_rebalancer::error::RebalanceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct RawAmount(u128);

impl RawAmount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new `RawAmount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Parses a raw amount from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidInput`] carrying `field` if the
    /// text is not a non-negative integer.
    pub fn parse(text: &str, field: &'static str) -> crate::error::Result<Self> {
        let value: u128 = text
            .trim()
            .parse()
            .map_err(|_| RebalanceError::InvalidInput(field))?;
        Ok(Self(value))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts this raw amount to the token's native scale.
    ///
    /// With `decimals = 6`, a raw amount of `1_500_000` yields `1.5`.
    /// Raw amounts above 2^53 lose precision because `f64` has only 53
    /// bits of mantissa.
    #[must_use]
    pub fn to_native(&self, decimals: Decimals) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = self.0 as f64;
        raw / decimals.factor()
    }

    /// Converts a native-scale value back to a raw amount, rounding to
    /// the nearest integer.
    ///
    /// The boundary interface is integer-only, so this is the single
    /// place where a computed real leaves the float domain.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::AmountOutOfRange`] if the value is
    /// negative, non-finite, or exceeds `u128::MAX` after rounding.
    pub fn from_native_rounded(value: f64, decimals: Decimals) -> crate::error::Result<Self> {
        let scaled = value * decimals.factor();
        if !scaled.is_finite() || scaled < 0.0 {
            return Err(RebalanceError::AmountOutOfRange(
                "amount must be finite and non-negative",
            ));
        }
        let rounded = scaled.round();
        #[allow(clippy::cast_precision_loss)]
        let max = u128::MAX as f64;
        if rounded > max {
            return Err(RebalanceError::AmountOutOfRange(
                "amount exceeds the raw-unit range",
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(rounded as u128))
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
