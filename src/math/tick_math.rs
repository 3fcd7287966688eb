//! Tick-to-price conversion, decimal-adjusted for the two pool tokens.
//!
//! Implements the standard `price = 1.0001^tick` relationship of
//! Uniswap v3-style pools, plus the decimal adjustment that expresses a
//! raw curve price at the tokens' native precision.
//!
//! # Functions
//!
//! - [`price_at_tick`] — `1.0001^tick` for a given [`Tick`].
//! - [`tick_at_price`] — the greatest tick whose price ≤ the given
//!   [`Price`].
//! - [`price_in_token1`] — price of token0 in token1 units at native
//!   precision.
//! - [`price_in_token0`] — reciprocal of [`price_in_token1`].
//!
//! # Precision
//!
//! The implementation uses `f64` arithmetic (`powf`, `ln`, `powi`). The
//! snap guard in [`tick_at_price`] keeps the tick → price → tick
//! round-trip exact for every integer tick despite IEEE 754 rounding.

use crate::domain::{DecimalPair, Price, Tick};
use crate::error::RebalanceError;

/// Base of the tick-price exponential: `price = BASE^tick`.
///
/// 0.01% per tick, inherited from the target AMM protocol. A fixed
/// domain constant, deliberately not a parameter.
const BASE: f64 = 1.0001;

/// Tolerance for snapping a floating-point tick value to the nearest
/// integer. This prevents round-trip errors caused by IEEE 754
/// rounding when converting `tick → price → tick`.
const SNAP_EPSILON: f64 = 1e-9;

/// Computes the raw curve price at a given tick: `price = 1.0001^tick`.
///
/// All valid [`Tick`] values (in the range `[-887272, 887272]`) produce
/// finite, positive prices within the `f64` representable range.
///
/// # Errors
///
/// Returns [`RebalanceError::InvalidPrice`] if the computed price is not
/// finite or is negative (should not occur for valid ticks, but guarded
/// for safety).
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::Tick;
/// use range_rebalancer::math::price_at_tick;
///
/// let price = price_at_tick(Tick::ZERO).expect("tick 0 is valid");
/// assert!((price.get() - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_at_tick(tick: Tick) -> Result<Price, RebalanceError> {
    #[allow(clippy::cast_lossless)]
    let price_f64 = BASE.powf(tick.get() as f64);
    Price::new(price_f64)
}

/// Computes the greatest tick whose price is ≤ the given price.
///
/// Implements `floor(log_{1.0001}(price))` with a snap-to-nearest
/// adjustment (within `SNAP_EPSILON`) to guarantee round-trip
/// correctness: `tick_at_price(price_at_tick(t)) == t` for all valid
/// ticks.
///
/// # Errors
///
/// - [`RebalanceError::InvalidPrice`] if `price` is zero (logarithm
///   undefined).
/// - [`RebalanceError::InvalidTick`] if the resulting tick falls
///   outside the valid range `[-887272, 887272]`.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::Price;
/// use range_rebalancer::math::tick_at_price;
///
/// let tick = tick_at_price(Price::ONE).expect("price 1.0 is valid");
/// assert_eq!(tick.get(), 0);
/// ```
#[must_use = "this returns the computed tick and does not modify state"]
pub fn tick_at_price(price: Price) -> Result<Tick, RebalanceError> {
    let p = price.get();
    if p <= 0.0 {
        return Err(RebalanceError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }

    let raw = p.ln() / BASE.ln();

    // Snap to nearest integer when within epsilon to avoid round-trip
    // errors from IEEE 754 imprecision.
    let rounded = raw.round();
    let tick_f64 = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    if !tick_f64.is_finite() {
        return Err(RebalanceError::InvalidTick(
            "price produces non-finite tick value",
        ));
    }

    // Safe truncation: tick_f64 is finite after the floor/round. Values
    // outside i32 will be caught by Tick::new().
    #[allow(clippy::cast_possible_truncation)]
    let tick_i32 = tick_f64 as i32;
    Tick::new(tick_i32)
}

/// Computes the price of token0 in token1 units at native precision.
///
/// The raw curve price is adjusted by the relative decimal scale of the
/// two tokens: `1.0001^tick × 10^(dec0 − dec1)`.
///
/// # Errors
///
/// Returns [`RebalanceError::InvalidPrice`] if the adjusted price is not
/// finite (extreme tick and decimal combinations).
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::{DecimalPair, Decimals, Tick};
/// use range_rebalancer::math::price_in_token1;
///
/// // 8-decimal token0, 6-decimal token1: tick 0 prices at 100.
/// let decimals = DecimalPair::new(Decimals::new(8)?, Decimals::new(6)?);
/// let price = price_in_token1(Tick::ZERO, decimals)?;
/// assert!((price.get() - 100.0).abs() < 1e-12);
/// # Ok::<(), range_rebalancer::error::RebalanceError>(())
/// ```
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_in_token1(tick: Tick, decimals: DecimalPair) -> Result<Price, RebalanceError> {
    let raw = price_at_tick(tick)?;
    Price::new(raw.get() * decimals.price_adjustment())
}

/// Computes the price of token1 in token0 units at native precision.
///
/// The reciprocal of [`price_in_token1`].
///
/// # Errors
///
/// Returns [`RebalanceError::DivisionByZero`] if the token1 price
/// underflows to zero, or [`RebalanceError::InvalidPrice`] if the
/// adjusted price is not finite.
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_in_token0(tick: Tick, decimals: DecimalPair) -> Result<Price, RebalanceError> {
    price_in_token1(tick, decimals)?.inverse()
}
