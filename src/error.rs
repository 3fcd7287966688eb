//! Unified error types for the rebalance library.
//!
//! All fallible operations across the crate return [`RebalanceError`] as
//! their error type. Variants carry a static message describing which
//! invariant was violated; no variant wraps a foreign error, so the enum
//! stays `Copy` and comparable in tests.
//!
//! The taxonomy mirrors the three failure classes of the system:
//!
//! | Class | Variants |
//! |-------|----------|
//! | Input validation | [`InvalidInput`](RebalanceError::InvalidInput), [`InvalidTick`](RebalanceError::InvalidTick), [`InvalidDecimals`](RebalanceError::InvalidDecimals) |
//! | Domain | [`InvalidPrice`](RebalanceError::InvalidPrice), [`InvalidTickRange`](RebalanceError::InvalidTickRange), [`InvalidLiquidity`](RebalanceError::InvalidLiquidity), [`DivisionByZero`](RebalanceError::DivisionByZero) |
//! | Arithmetic edge | [`NonPositiveDenominator`](RebalanceError::NonPositiveDenominator), [`AmountOutOfRange`](RebalanceError::AmountOutOfRange) |

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, RebalanceError>;

/// Unified error enum for all fallible operations in the crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceError {
    /// A raw input field could not be parsed as the required type.
    ///
    /// The payload names the offending field.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A tick index is outside the valid range `[-887272, 887272]`.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A tick range is degenerate or does not bracket the current tick.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),

    /// A decimal count is outside the supported `0..=18` range.
    #[error("invalid decimals: {0}")]
    InvalidDecimals(&'static str),

    /// A price value is negative, zero where positivity is required,
    /// or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A liquidity value is negative or not finite.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// A divisor collapsed to zero, typically a sqrt-price pair whose
    /// bounds coincide.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// The rebalance split denominator `1 + ratio` is not positive.
    #[error("non-positive denominator: {0}")]
    NonPositiveDenominator(&'static str),

    /// A computed amount is negative, non-finite, or exceeds the
    /// representable raw-amount range.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(&'static str),
}
