//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use range_rebalancer::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    DecimalPair, Decimals, DepositSide, Liquidity, Price, RawAmount, SqrtPrice, Tick, TickRange,
};

// Re-export math
pub use crate::math::{
    amount0_from_liquidity, amount1_from_liquidity, liquidity_for_deposit, liquidity_from_token0,
    liquidity_from_token1, price_at_tick, price_in_token0, price_in_token1, tick_at_price,
};

// Re-export the solver surface
pub use crate::solver::{solve_rebalance, RebalanceRequest};

// Re-export the output encoding
pub use crate::encode::encode_word;

// Re-export error types
pub use crate::error::{RebalanceError, Result};
