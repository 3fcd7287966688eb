//! Fixed-width binary encoding of the solved amount.
//!
//! The downstream transport consumes one ABI `uint256`: a 32-byte
//! big-endian unsigned word, hex-encoded with a `0x` prefix. The solver
//! guarantees a non-negative integer, and every [`RawAmount`] fits the
//! uint256 range, so encoding is infallible.

use alloy_primitives::{hex, U256};

use crate::domain::RawAmount;

/// Packs a raw amount into a `0x`-prefixed, 32-byte big-endian hex word.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::RawAmount;
/// use range_rebalancer::encode::encode_word;
///
/// assert_eq!(
///     encode_word(RawAmount::new(1)),
///     "0x0000000000000000000000000000000000000000000000000000000000000001",
/// );
/// ```
#[must_use]
pub fn encode_word(amount: RawAmount) -> String {
    let word = U256::from(amount.get());
    format!("0x{}", hex::encode(word.to_be_bytes::<32>()))
}
