use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::format_usd;
use crate::payment::{DeclineReason, PaymentOutcome, PaymentProcessor, PaymentReceipt};

/// Response shape of the external settlement service. It predates
/// `PaymentOutcome`: approval is a flag plus a free-text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub approved: bool,
    pub amount: Decimal,
    pub merchant: String,
    pub message: String,
}

/// External payment service with its own call shape: settlement runs
/// against a named merchant, and only negative amounts are refused.
/// There is no upper cap.
#[derive(Debug, Clone, Default)]
pub struct LegacyGateway;

impl LegacyGateway {
    pub fn new() -> Self {
        Self
    }

    pub fn process_payment(&self, amount: Decimal, business_name: &str) -> GatewayResponse {
        if amount < Decimal::ZERO {
            tracing::warn!(
                "legacy gateway refused {} for {}",
                format_usd(amount),
                business_name
            );
            return GatewayResponse {
                approved: false,
                amount,
                merchant: business_name.to_string(),
                message: format!("settlement refused: {} is negative", format_usd(amount)),
            };
        }

        tracing::info!(
            "legacy gateway settled {} for {}",
            format_usd(amount),
            business_name
        );
        GatewayResponse {
            approved: true,
            amount,
            merchant: business_name.to_string(),
            message: format!(
                "settled {} for {}",
                format_usd(amount),
                business_name
            ),
        }
    }
}

/// Adapts the gateway's two-argument surface to `PaymentProcessor` by
/// fixing the merchant name at construction time.
#[derive(Debug, Clone)]
pub struct LegacyGatewayAdapter {
    gateway: LegacyGateway,
    business_name: String,
}

impl LegacyGatewayAdapter {
    pub fn new(gateway: LegacyGateway, business_name: impl Into<String>) -> Self {
        Self {
            gateway,
            business_name: business_name.into(),
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }
}

impl PaymentProcessor for LegacyGatewayAdapter {
    fn pay(&self, amount: Decimal) -> PaymentOutcome {
        let response = self.gateway.process_payment(amount, &self.business_name);
        if response.approved {
            PaymentOutcome::Accepted(PaymentReceipt {
                reference: Uuid::new_v4(),
                processor: "legacy gateway".to_string(),
                amount: response.amount,
                business_name: Some(response.merchant),
                processed_at: Utc::now(),
            })
        } else {
            // The gateway's only refusal rule is a negative amount.
            PaymentOutcome::Declined {
                amount,
                reason: DeclineReason::NegativeAmount,
            }
        }
    }
}
