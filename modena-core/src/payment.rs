use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{format_usd, Price};

/// A payment capability: take an amount, report what happened.
///
/// Implementations decide their own acceptance policy. A decline is a
/// reported outcome, never an `Err`; callers branch on the result
/// instead of unwinding.
pub trait PaymentProcessor {
    fn pay(&self, amount: Decimal) -> PaymentOutcome;
}

/// What a processor decided about one payment attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Accepted(PaymentReceipt),
    Declined {
        amount: Decimal,
        reason: DeclineReason,
    },
}

impl PaymentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub processor: String,
    pub amount: Decimal,
    /// Merchant the payment was settled against, for processors that
    /// settle against a named business.
    pub business_name: Option<String>,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeclineReason {
    NegativeAmount,
    OverCap { cap: Price },
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclineReason::NegativeAmount => write!(f, "amount is negative"),
            DeclineReason::OverCap { cap } => {
                write!(f, "amount exceeds the {} cap", format_usd(cap.amount()))
            }
        }
    }
}

/// In-house processor for amounts up to a configured cap.
///
/// Declines anything negative or above the cap; an amount exactly at the
/// cap is accepted.
#[derive(Debug, Clone)]
pub struct DirectProcessor {
    cap: Price,
}

impl DirectProcessor {
    pub fn new(cap: Price) -> Self {
        Self { cap }
    }
}

impl Default for DirectProcessor {
    /// Standard cap of $10,000.
    fn default() -> Self {
        Self::new(Price::from(10_000))
    }
}

impl PaymentProcessor for DirectProcessor {
    fn pay(&self, amount: Decimal) -> PaymentOutcome {
        if amount < Decimal::ZERO {
            tracing::warn!("direct processor declined {}: negative", format_usd(amount));
            return PaymentOutcome::Declined {
                amount,
                reason: DeclineReason::NegativeAmount,
            };
        }
        if amount > self.cap.amount() {
            tracing::warn!(
                "direct processor declined {}: over the {} cap",
                format_usd(amount),
                format_usd(self.cap.amount())
            );
            return PaymentOutcome::Declined {
                amount,
                reason: DeclineReason::OverCap { cap: self.cap },
            };
        }

        let receipt = PaymentReceipt {
            reference: Uuid::new_v4(),
            processor: "direct processor".to_string(),
            amount,
            business_name: None,
            processed_at: Utc::now(),
        };
        tracing::info!(
            "direct processor accepted {} (ref {})",
            format_usd(amount),
            receipt.reference
        );
        PaymentOutcome::Accepted(receipt)
    }
}

/// Runs one payment attempt through whichever processor the caller
/// supplies. Pure pass-through; the outcome is the processor's alone.
pub fn checkout(processor: &dyn PaymentProcessor, amount: Decimal) -> PaymentOutcome {
    processor.pay(amount)
}
