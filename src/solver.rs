//! Closed-form solver for the pre-deposit rebalance split.
//!
//! Given a deposit denominated in a single token and a target tick
//! range, [`solve_rebalance`] computes how much of the deposit must be
//! swapped into the paired token so that providing the resulting pair
//! into the range at the current price consumes both tokens without
//! leftover.
//!
//! The solver derives the token0-to-token1 value ratio implied by one
//! unit of liquidity at the boundary nearest the current price, then
//! applies that ratio directly to the deposit. This is an O(1)
//! closed-form replacement for an iterative search over candidate split
//! points; the two are equivalent at the limit of infinitesimal step
//! size.

use crate::domain::{DecimalPair, Decimals, DepositSide, RawAmount, Tick, TickRange};
use crate::error::RebalanceError;
use crate::math::{amount0_from_liquidity, liquidity_from_token1, price_in_token0, price_in_token1};

/// Validated input surface of the solver.
///
/// Mirrors the six scalar parameters crossing the system boundary:
/// deposit amount, tick range, current tick, deposit side, and the two
/// tokens' decimal counts. Construction guarantees the current tick
/// lies strictly inside the range, which is what keeps the unit
/// liquidity and implied token0 leg well defined.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::{
///     DecimalPair, Decimals, DepositSide, RawAmount, Tick, TickRange,
/// };
/// use range_rebalancer::solver::RebalanceRequest;
///
/// let range = TickRange::new(Tick::new(59_000)?, Tick::new(62_000)?)?;
/// let decimals = DecimalPair::new(Decimals::new(8)?, Decimals::new(6)?);
/// let request = RebalanceRequest::new(
///     RawAmount::new(5_000_000_000),
///     range,
///     Tick::new(60_000)?,
///     DepositSide::Token0,
///     decimals,
/// )?;
/// assert_eq!(request.current_tick().get(), 60_000);
/// # Ok::<(), range_rebalancer::error::RebalanceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceRequest {
    amount: RawAmount,
    range: TickRange,
    current_tick: Tick,
    side: DepositSide,
    decimals: DecimalPair,
}

impl RebalanceRequest {
    /// Creates a request after validating that `current_tick` lies
    /// strictly inside `range`.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidTickRange`] if the current tick
    /// sits on or outside the range bounds: the solver splits the range
    /// at the current tick, and both sub-intervals must have non-zero
    /// width.
    pub fn new(
        amount: RawAmount,
        range: TickRange,
        current_tick: Tick,
        side: DepositSide,
        decimals: DecimalPair,
    ) -> crate::error::Result<Self> {
        if !range.strictly_contains(current_tick) {
            return Err(RebalanceError::InvalidTickRange(
                "current tick must lie strictly inside the range",
            ));
        }
        Ok(Self {
            amount,
            range,
            current_tick,
            side,
            decimals,
        })
    }

    /// Parses the raw string surface of the external interface.
    ///
    /// Expected order matches the original tool:
    /// `amount lower_tick upper_tick current_tick is_token0 dec0 dec1`.
    /// Every numeric field must parse as an integer; the flag accepts
    /// only `"true"` or `"false"`.
    ///
    /// # Errors
    ///
    /// Fails fast with a validation error on the first malformed field,
    /// before any arithmetic.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> crate::error::Result<Self> {
        let [amount, lower, upper, current, flag, dec0, dec1] = args else {
            return Err(RebalanceError::InvalidInput(
                "expected 7 arguments: amount lower_tick upper_tick current_tick is_token0 dec0 dec1",
            ));
        };

        let amount = RawAmount::parse(amount.as_ref(), "amount")?;
        let lower = Tick::parse(lower.as_ref(), "lower_tick")?;
        let upper = Tick::parse(upper.as_ref(), "upper_tick")?;
        let current = Tick::parse(current.as_ref(), "current_tick")?;
        let side = DepositSide::from_flag(flag.as_ref())?;
        let decimals = DecimalPair::new(
            Decimals::parse(dec0.as_ref(), "token0_decimals")?,
            Decimals::parse(dec1.as_ref(), "token1_decimals")?,
        );

        Self::new(amount, TickRange::new(lower, upper)?, current, side, decimals)
    }

    /// Returns the deposit amount in raw units of the deposit token.
    #[must_use]
    pub const fn amount(&self) -> RawAmount {
        self.amount
    }

    /// Returns the target tick range.
    #[must_use]
    pub const fn range(&self) -> TickRange {
        self.range
    }

    /// Returns the current pool tick.
    #[must_use]
    pub const fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Returns the token the deposit is denominated in.
    #[must_use]
    pub const fn side(&self) -> DepositSide {
        self.side
    }

    /// Returns both tokens' decimal counts.
    #[must_use]
    pub const fn decimals(&self) -> DecimalPair {
        self.decimals
    }
}

/// Computes the portion of the deposit to swap into the paired token,
/// in raw units of the deposit token.
///
/// The computation, all at native scale in token1 as the common unit of
/// account:
///
/// 1. scale the raw deposit to native units and, for a token0 deposit,
///    value it in token1 at the current price;
/// 2. compute the liquidity one unit of token1 buys between the lower
///    bound and the current tick;
/// 3. compute the token0 amount that unit liquidity implies between the
///    current tick and the upper bound;
/// 4. `ratio` = current price × that token0 amount — the token1 value
///    of the per-unit token0 leg;
/// 5. the token1 share of the deposit is `amount / (1 + ratio)`; the
///    token0 share is the remainder;
/// 6. convert the share being swapped back to raw units of the deposit
///    token, rounded to the nearest integer.
///
/// # Errors
///
/// - [`RebalanceError::DivisionByZero`] if a boundary pair collapses
///   (cannot occur for a validated request, but surfaced rather than
///   assumed away);
/// - [`RebalanceError::NonPositiveDenominator`] if `1 + ratio` is not
///   positive;
/// - [`RebalanceError::AmountOutOfRange`] if the rounded result does
///   not fit the raw-amount range.
#[must_use = "this returns the computed amount and does not modify state"]
pub fn solve_rebalance(request: &RebalanceRequest) -> crate::error::Result<RawAmount> {
    let decimals = request.decimals();
    let current = request.current_tick();
    let range = request.range();

    let price = price_in_token1(current, decimals)?;
    let sqrt_current = price.sqrt()?;
    let sqrt_lower = price_in_token1(range.lower(), decimals)?.sqrt()?;
    let sqrt_upper = price_in_token1(range.upper(), decimals)?.sqrt()?;

    // The whole split is solved in token1 as the common unit of account.
    let native = request.amount().to_native(decimals.for_side(request.side()));
    let common = match request.side() {
        DepositSide::Token0 => native * price.get(),
        DepositSide::Token1 => native,
    };

    // Value ratio of the two legs implied by one unit of liquidity at
    // the boundary nearest the current price.
    let unit_liquidity = liquidity_from_token1(1.0, sqrt_lower, sqrt_current)?;
    let unit_amount0 = amount0_from_liquidity(unit_liquidity, sqrt_upper, sqrt_current)?;
    let ratio = price.get() * unit_amount0;

    let denominator = 1.0 + ratio;
    if denominator <= 0.0 {
        return Err(RebalanceError::NonPositiveDenominator(
            "1 + ratio must be positive",
        ));
    }
    let token1_share = common / denominator;

    match request.side() {
        DepositSide::Token0 => {
            // The token1-valued share converted back into token0 raw
            // units: this much token0 gets swapped away.
            let in_token0 = token1_share * price_in_token0(current, decimals)?.get();
            RawAmount::from_native_rounded(in_token0, decimals.token0())
        }
        DepositSide::Token1 => {
            // The remainder is the token0 leg's value; this much token1
            // gets swapped into token0.
            RawAmount::from_native_rounded(common - token1_share, decimals.token1())
        }
    }
}
