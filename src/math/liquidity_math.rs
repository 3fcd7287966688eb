//! Liquidity formulas for a concentrated position over a price range.
//!
//! All boundary arguments are sqrt-prices of decimal-adjusted prices
//! (see [`price_in_token1`](super::price_in_token1)). Every function
//! normalizes its two boundaries so the lower one comes first; callers
//! may pass them in either order. A pair of coinciding boundaries is
//! rejected: each formula divides by the interval width.
//!
//! The formulas are the standard single-range relationships:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | `L` from token0 | `x·a·b / (b − a)` |
//! | `L` from token1 | `y / (b − a)` |
//! | token0 from `L` | `L·(b − a) / b / a` |
//! | token1 from `L` | `L·(b − a)` |

use crate::domain::{Liquidity, SqrtPrice};
use crate::error::RebalanceError;

/// Orders a boundary pair and rejects a collapsed interval.
fn ordered(a: SqrtPrice, b: SqrtPrice) -> Result<(f64, f64), RebalanceError> {
    let (lo, hi) = if a <= b {
        (a.get(), b.get())
    } else {
        (b.get(), a.get())
    };
    if lo == hi {
        return Err(RebalanceError::DivisionByZero(
            "sqrt price bounds coincide",
        ));
    }
    Ok((lo, hi))
}

/// Computes the liquidity implied by `amount0` of token0 over the
/// boundary pair: `amount0·a·b / (b − a)`.
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the two boundaries
/// coincide, or [`RebalanceError::InvalidLiquidity`] if the result is
/// negative or not finite.
#[must_use = "this returns the computed liquidity and does not modify state"]
pub fn liquidity_from_token0(
    amount0: f64,
    a: SqrtPrice,
    b: SqrtPrice,
) -> Result<Liquidity, RebalanceError> {
    let (lo, hi) = ordered(a, b)?;
    Liquidity::new(amount0 * lo * hi / (hi - lo))
}

/// Computes the liquidity implied by `amount1` of token1 over the
/// boundary pair: `amount1 / (b − a)`.
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the two boundaries
/// coincide, or [`RebalanceError::InvalidLiquidity`] if the result is
/// negative or not finite.
#[must_use = "this returns the computed liquidity and does not modify state"]
pub fn liquidity_from_token1(
    amount1: f64,
    a: SqrtPrice,
    b: SqrtPrice,
) -> Result<Liquidity, RebalanceError> {
    let (lo, hi) = ordered(a, b)?;
    Liquidity::new(amount1 / (hi - lo))
}

/// Computes the token0 amount a position of `liq` holds over the
/// boundary pair: `liq·(b − a) / b / a`.
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the two boundaries
/// coincide.
#[must_use = "this returns the computed amount and does not modify state"]
pub fn amount0_from_liquidity(
    liq: Liquidity,
    a: SqrtPrice,
    b: SqrtPrice,
) -> Result<f64, RebalanceError> {
    let (lo, hi) = ordered(a, b)?;
    Ok(liq.get() * (hi - lo) / hi / lo)
}

/// Computes the token1 amount a position of `liq` holds over the
/// boundary pair: `liq·(b − a)`.
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the two boundaries
/// coincide.
#[must_use = "this returns the computed amount and does not modify state"]
pub fn amount1_from_liquidity(
    liq: Liquidity,
    a: SqrtPrice,
    b: SqrtPrice,
) -> Result<f64, RebalanceError> {
    let (lo, hi) = ordered(a, b)?;
    Ok(liq.get() * (hi - lo))
}

/// Computes the liquidity a deposit of `amount0` and `amount1` supports
/// over `[a, b]`, given the current sqrt-price.
///
/// Three-regime piecewise rule (after normalizing `a ≤ b`):
///
/// - `current ≤ a` — position entirely below the current price; only
///   token0 is binding, so the token0 formula over `[a, b]` applies.
/// - `a < current < b` — current price inside the range; the liquidity
///   each side supports is computed independently (token0 over
///   `[current, b]`, token1 over `[a, current]`) and the minimum is
///   taken. Whichever token runs out first is the binding constraint,
///   so the result never requires more of either token than supplied.
/// - `current ≥ b` — position entirely above the current price; only
///   token1 is binding.
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the range boundaries
/// coincide, or [`RebalanceError::InvalidLiquidity`] if a computed
/// liquidity is negative or not finite.
#[must_use = "this returns the computed liquidity and does not modify state"]
pub fn liquidity_for_deposit(
    amount0: f64,
    amount1: f64,
    current: SqrtPrice,
    a: SqrtPrice,
    b: SqrtPrice,
) -> Result<Liquidity, RebalanceError> {
    let (lo, hi) = ordered(a, b)?;
    let (lower, upper) = (SqrtPrice::new(lo)?, SqrtPrice::new(hi)?);

    if current <= lower {
        liquidity_from_token0(amount0, lower, upper)
    } else if current < upper {
        let liq0 = liquidity_from_token0(amount0, current, upper)?;
        let liq1 = liquidity_from_token1(amount1, lower, current)?;
        Ok(liq0.min(liq1))
    } else {
        liquidity_from_token1(amount1, lower, upper)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sqrt(v: f64) -> SqrtPrice {
        let Ok(s) = SqrtPrice::new(v) else {
            panic!("valid sqrt price");
        };
        s
    }

    // -- Single-sided formulas ----------------------------------------------

    #[test]
    fn token0_liquidity_known_value() {
        // x=10, a=2, b=4: 10 * 2 * 4 / 2 = 40
        let Ok(liq) = liquidity_from_token0(10.0, sqrt(2.0), sqrt(4.0)) else {
            panic!("expected Ok");
        };
        assert!((liq.get() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn token1_liquidity_known_value() {
        // y=10, a=2, b=4: 10 / 2 = 5
        let Ok(liq) = liquidity_from_token1(10.0, sqrt(2.0), sqrt(4.0)) else {
            panic!("expected Ok");
        };
        assert!((liq.get() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn order_invariance() {
        let (a, b) = (sqrt(1.5), sqrt(3.5));
        assert_eq!(
            liquidity_from_token0(7.0, a, b),
            liquidity_from_token0(7.0, b, a)
        );
        assert_eq!(
            liquidity_from_token1(7.0, a, b),
            liquidity_from_token1(7.0, b, a)
        );
        assert_eq!(
            amount0_from_liquidity(Liquidity::ZERO, a, b),
            amount0_from_liquidity(Liquidity::ZERO, b, a)
        );
    }

    #[test]
    fn collapsed_bounds_rejected() {
        let a = sqrt(2.0);
        assert_eq!(
            liquidity_from_token0(1.0, a, a),
            Err(RebalanceError::DivisionByZero("sqrt price bounds coincide"))
        );
        assert!(liquidity_from_token1(1.0, a, a).is_err());
        assert!(amount0_from_liquidity(Liquidity::ZERO, a, a).is_err());
        assert!(amount1_from_liquidity(Liquidity::ZERO, a, a).is_err());
    }

    #[test]
    fn negative_amount_rejected() {
        assert!(liquidity_from_token0(-1.0, sqrt(2.0), sqrt(4.0)).is_err());
        assert!(liquidity_from_token1(-1.0, sqrt(2.0), sqrt(4.0)).is_err());
    }

    // -- Amount round-trips -------------------------------------------------

    #[test]
    fn token0_amount_round_trip() {
        let (a, b) = (sqrt(200.0), sqrt(220.0));
        let Ok(liq) = liquidity_from_token0(12.5, a, b) else {
            panic!("expected Ok");
        };
        let Ok(amount0) = amount0_from_liquidity(liq, a, b) else {
            panic!("expected Ok");
        };
        assert!(
            (amount0 - 12.5).abs() < 1e-9,
            "round-trip lost precision: {amount0}"
        );
    }

    #[test]
    fn token1_amount_round_trip() {
        let (a, b) = (sqrt(200.0), sqrt(220.0));
        let Ok(liq) = liquidity_from_token1(9_999.25, a, b) else {
            panic!("expected Ok");
        };
        let Ok(amount1) = amount1_from_liquidity(liq, a, b) else {
            panic!("expected Ok");
        };
        assert!(
            (amount1 - 9_999.25).abs() < 1e-9,
            "round-trip lost precision: {amount1}"
        );
    }

    // -- Three-regime deposit rule ------------------------------------------

    #[test]
    fn deposit_below_range_uses_token0_only() {
        let (a, b) = (sqrt(2.0), sqrt(4.0));
        let Ok(liq) = liquidity_for_deposit(10.0, 999.0, sqrt(1.0), a, b) else {
            panic!("expected Ok");
        };
        let Ok(expected) = liquidity_from_token0(10.0, a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(liq, expected, "token1 amount must be ignored below range");
    }

    #[test]
    fn deposit_above_range_uses_token1_only() {
        let (a, b) = (sqrt(2.0), sqrt(4.0));
        let Ok(liq) = liquidity_for_deposit(999.0, 10.0, sqrt(5.0), a, b) else {
            panic!("expected Ok");
        };
        let Ok(expected) = liquidity_from_token1(10.0, a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(liq, expected, "token0 amount must be ignored above range");
    }

    #[test]
    fn deposit_inside_range_takes_minimum() {
        let (a, b, current) = (sqrt(2.0), sqrt(4.0), sqrt(3.0));
        let Ok(liq0) = liquidity_from_token0(10.0, current, b) else {
            panic!("expected Ok");
        };
        let Ok(liq1) = liquidity_from_token1(10.0, a, current) else {
            panic!("expected Ok");
        };
        let Ok(liq) = liquidity_for_deposit(10.0, 10.0, current, a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(liq, liq0.min(liq1));
    }

    #[test]
    fn deposit_continuous_at_lower_edge() {
        let (a, b) = (sqrt(2.0), sqrt(4.0));
        let Ok(at_edge) = liquidity_for_deposit(10.0, 3.0, a, a, b) else {
            panic!("expected Ok");
        };
        let Ok(below) = liquidity_from_token0(10.0, a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(at_edge, below, "lower edge must match the below-range rule");
    }

    #[test]
    fn deposit_continuous_at_upper_edge() {
        let (a, b) = (sqrt(2.0), sqrt(4.0));
        let Ok(at_edge) = liquidity_for_deposit(3.0, 10.0, b, a, b) else {
            panic!("expected Ok");
        };
        let Ok(above) = liquidity_from_token1(10.0, a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(at_edge, above, "upper edge must match the above-range rule");
    }

    #[test]
    fn deposit_with_collapsed_range_fails() {
        let a = sqrt(2.0);
        assert!(liquidity_for_deposit(1.0, 1.0, sqrt(3.0), a, a).is_err());
    }
}
