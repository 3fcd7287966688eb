//! Token decimal places and the per-pair decimal adjustment.

use super::DepositSide;
use crate::error::RebalanceError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=18`, matching the common blockchain standard.
/// Construction is validated: values above 18 are rejected.
///
/// # Examples
///
/// ```
/// use range_rebalancer::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidDecimals`] if `value` exceeds 18.
    pub const fn new(value: u8) -> crate::error::Result<Self> {
        if value > MAX_DECIMALS {
            return Err(RebalanceError::InvalidDecimals("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Parses a decimal count from a string, rejecting non-integer input.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidInput`] carrying `field` if the
    /// text is not a non-negative integer, or
    /// [`RebalanceError::InvalidDecimals`] if it exceeds 18.
    pub fn parse(text: &str, field: &'static str) -> crate::error::Result<Self> {
        let value: u8 = text
            .trim()
            .parse()
            .map_err(|_| RebalanceError::InvalidInput(field))?;
        Self::new(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as `f64`, the raw-to-native unit scale.
    #[must_use]
    pub fn factor(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }
}

/// Decimal precision of both pool tokens.
///
/// Carries the information needed to move between raw curve prices and
/// prices at the tokens' native precision: a raw tick price is multiplied
/// by `10^(dec0 − dec1)` to express token0 in token1 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalPair {
    token0: Decimals,
    token1: Decimals,
}

impl DecimalPair {
    /// Creates a pair from the two tokens' decimal counts.
    #[must_use]
    pub const fn new(token0: Decimals, token1: Decimals) -> Self {
        Self { token0, token1 }
    }

    /// Returns token0's decimals.
    #[must_use]
    pub const fn token0(&self) -> Decimals {
        self.token0
    }

    /// Returns token1's decimals.
    #[must_use]
    pub const fn token1(&self) -> Decimals {
        self.token1
    }

    /// Returns the decimals of the token on the given deposit side.
    #[must_use]
    pub const fn for_side(&self, side: DepositSide) -> Decimals {
        match side {
            DepositSide::Token0 => self.token0,
            DepositSide::Token1 => self.token1,
        }
    }

    /// Returns `10^(dec0 − dec1)`, the factor converting a raw curve
    /// price into a native-precision token1-per-token0 price.
    #[must_use]
    pub fn price_adjustment(&self) -> f64 {
        10f64.powi(i32::from(self.token0.get()) - i32::from(self.token1.get()))
    }
}
