//! Fundamental domain value types used throughout the rebalance library.
//!
//! This module contains the core value types that model the domain:
//! ticks, ranges, prices, decimal scales, and amounts. All types use
//! newtypes with validated constructors to enforce invariants, and all
//! are immutable `Copy` values computed fresh per invocation.

mod amount;
mod decimals;
mod deposit_side;
mod liquidity;
mod price;
mod sqrt_price;
mod tick;
mod tick_range;

pub use amount::RawAmount;
pub use decimals::{DecimalPair, Decimals};
pub use deposit_side::DepositSide;
pub use liquidity::Liquidity;
pub use price::Price;
pub use sqrt_price::SqrtPrice;
pub use tick::Tick;
pub use tick_range::TickRange;
