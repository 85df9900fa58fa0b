use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in dollars and cents.
///
/// Catalog prices go through this type so a priced tree can never hold a
/// negative node. Raw `Decimal` stays in use where negative values must
/// be representable, such as payment attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("negative amount: {0}")]
    Negative(Decimal),
}

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Rejects negative values. Zero is a valid price.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount < Decimal::ZERO {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

/// Formats an amount as dollars with exactly two decimal places,
/// e.g. `$42701.98`.
pub fn format_usd(amount: Decimal) -> String {
    let mut fixed = amount.round_dp(2);
    fixed.rescale(2);
    format!("${fixed}")
}
