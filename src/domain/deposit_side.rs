//! Which pool token a single-sided deposit is denominated in.

use core::fmt;

use crate::error::RebalanceError;

/// The token in which a single-sided deposit is denominated.
///
/// Replaces the raw `is_token0` boolean of the external surface with an
/// explicit enum. The flag is never coerced numerically: only the
/// literals `"true"` and `"false"` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositSide {
    /// The deposit is denominated in token0.
    Token0,
    /// The deposit is denominated in token1.
    Token1,
}

impl DepositSide {
    /// Parses the `is_token0` flag of the external surface.
    ///
    /// # Errors
    ///
    /// Returns [`RebalanceError::InvalidInput`] for anything other than
    /// the exact literals `"true"` or `"false"`.
    pub fn from_flag(text: &str) -> crate::error::Result<Self> {
        match text.trim() {
            "true" => Ok(Self::Token0),
            "false" => Ok(Self::Token1),
            _ => Err(RebalanceError::InvalidInput(
                "is_token0 must be \"true\" or \"false\"",
            )),
        }
    }
}

impl fmt::Display for DepositSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token0 => write!(f, "token0"),
            Self::Token1 => write!(f, "token1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_is_token0() {
        assert_eq!(DepositSide::from_flag("true"), Ok(DepositSide::Token0));
    }

    #[test]
    fn false_is_token1() {
        assert_eq!(DepositSide::from_flag("false"), Ok(DepositSide::Token1));
    }

    #[test]
    fn no_numeric_coercion() {
        assert!(DepositSide::from_flag("1").is_err());
        assert!(DepositSide::from_flag("0").is_err());
        assert!(DepositSide::from_flag("True").is_err());
        assert!(DepositSide::from_flag("").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", DepositSide::Token0), "token0");
        assert_eq!(format!("{}", DepositSide::Token1), "token1");
    }
}
