//! Pure conversion and liquidity math.
//!
//! Two layers, both side-effect-free:
//!
//! - tick math — the `1.0001^tick` price curve and its decimal-adjusted
//!   variants ([`price_at_tick`], [`tick_at_price`], [`price_in_token1`],
//!   [`price_in_token0`]);
//! - liquidity math — the single-range liquidity formulas and the
//!   three-regime deposit rule ([`liquidity_for_deposit`]).

mod liquidity_math;
mod tick_math;

#[cfg(test)]
mod proptest_properties;

pub use liquidity_math::{
    amount0_from_liquidity, amount1_from_liquidity, liquidity_for_deposit, liquidity_from_token0,
    liquidity_from_token1,
};
pub use tick_math::{price_at_tick, price_in_token0, price_in_token1, tick_at_price};
