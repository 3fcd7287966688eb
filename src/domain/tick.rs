//! Discrete price point on the AMM's geometric price curve.

use core::fmt;

use crate::error::RebalanceError;

/// Minimum valid tick index (Uniswap v3 standard).
const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index (Uniswap v3 standard).
const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated liquidity model.
///
/// Follows the Uniswap v3 convention where price increases exponentially
/// with the tick index: `price = 1.0001^tick`. Valid tick indices range
/// from [`MIN`](Self::MIN) (`-887272`) to [`MAX`](Self::MAX) (`887272`).
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidTick`] if `value` is outside
    /// the range `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(RebalanceError::InvalidTick(
                "tick out of range [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Parses a tick from a decimal string, rejecting non-integer input.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidInput`] carrying `field` if the
    /// text is not a valid signed integer, or
    /// [`RebalanceError::InvalidTick`] if the parsed value is out of
    /// range.
    pub fn parse(text: &str, field: &'static str) -> crate::error::Result<Self> {
        let value: i32 = text
            .trim()
            .parse()
            .map_err(|_| RebalanceError::InvalidInput(field))?;
        Self::new(value)
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
