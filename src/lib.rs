//! # Range Rebalancer
//!
//! Closed-form swap sizing for concentrated-liquidity range deposits.
//!
//! Given a deposit denominated in a single token, a target tick range,
//! and the current pool tick of a Uniswap v3-style pool, this crate
//! computes how much of the deposit must be swapped into the paired
//! token so that providing the resulting pair into the range consumes
//! both tokens without leftover.
//!
//! The crate is the pure computational core of a larger rebalancing
//! pipeline: fetching the current tick, token decimals, or swap quotes
//! from external services — and transmitting the encoded result — are
//! collaborator concerns that happen before and after this crate runs.
//! Every operation here is a pure function of its explicit arguments;
//! nothing blocks, retries, or holds state across calls.
//!
//! # Quick Start
//!
//! ```rust
//! use range_rebalancer::domain::{
//!     DecimalPair, Decimals, DepositSide, RawAmount, Tick, TickRange,
//! };
//! use range_rebalancer::encode::encode_word;
//! use range_rebalancer::solver::{solve_rebalance, RebalanceRequest};
//!
//! // Deposit 50 units of an 8-decimal token0 into a range bracketing
//! // the current tick.
//! let request = RebalanceRequest::new(
//!     RawAmount::new(50 * 100_000_000),
//!     TickRange::new(Tick::new(59_000)?, Tick::new(62_000)?)?,
//!     Tick::new(60_500)?,
//!     DepositSide::Token0,
//!     DecimalPair::new(Decimals::new(8)?, Decimals::new(6)?),
//! )?;
//!
//! let to_swap = solve_rebalance(&request)?;
//! assert!(to_swap < request.amount());
//!
//! // The word handed to the on-chain transport.
//! let word = encode_word(to_swap);
//! assert!(word.starts_with("0x"));
//! assert_eq!(word.len(), 66);
//! # Ok::<(), range_rebalancer::error::RebalanceError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  six scalars: amount, range, tick, side, decimals
//! └──────┬───────┘
//!        │ RebalanceRequest::new / from_args (validated)
//!        ▼
//! ┌──────────────┐
//! │    Solver     │  closed-form split at the current price
//! └──────┬───────┘
//!        │ price_in_token1 · liquidity_from_token1 · amount0_from_liquidity
//!        ▼
//! ┌──────────────┐
//! │     Math      │  tick ↔ price curve, single-range liquidity formulas
//! └──────┬───────┘
//!        │ RawAmount (rounded integer)
//!        ▼
//! ┌──────────────┐
//! │   Encoder     │  0x-prefixed 32-byte big-endian uint256 word
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Tick`](domain::Tick), [`Price`](domain::Price), [`RawAmount`](domain::RawAmount), etc. |
//! | [`math`] | Tick ↔ price conversion and liquidity formulas |
//! | [`solver`] | [`RebalanceRequest`](solver::RebalanceRequest) and the closed-form split |
//! | [`encode`] | uint256 word encoding of the result |
//! | [`error`] | [`RebalanceError`](error::RebalanceError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod encode;
pub mod error;
pub mod math;
pub mod prelude;
pub mod solver;
