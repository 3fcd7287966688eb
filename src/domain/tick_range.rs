//! Target price range for a concentrated liquidity deposit.

use core::fmt;

use super::Tick;
use crate::error::RebalanceError;

/// The `[lower, upper]` tick interval over which a position supplies
/// liquidity.
///
/// The constructor accepts the two bounds in either order and normalizes
/// them so `lower < upper` holds for every constructed value. A range
/// collapsed to a single tick is rejected: every downstream liquidity
/// formula divides by the width of the interval.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::{Tick, TickRange};
///
/// let a = Tick::new(200)?;
/// let b = Tick::new(-100)?;
/// let range = TickRange::new(a, b)?;
/// assert_eq!(range.lower().get(), -100);
/// assert_eq!(range.upper().get(), 200);
/// # Ok::<(), range_rebalancer::error::RebalanceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRange {
    lower: Tick,
    upper: Tick,
}

impl TickRange {
    /// Creates a range from two bounds, swapping them if given reversed.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidTickRange`] if both bounds are
    /// the same tick.
    pub fn new(a: Tick, b: Tick) -> crate::error::Result<Self> {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        if lower == upper {
            return Err(RebalanceError::InvalidTickRange(
                "range collapsed to a single tick",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Tick {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Tick {
        self.upper
    }

    /// Returns `true` if `tick` lies strictly inside the open interval
    /// `(lower, upper)`.
    #[must_use]
    pub fn strictly_contains(&self, tick: Tick) -> bool {
        self.lower < tick && tick < self.upper
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
