use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use modena_core::money::format_usd;
use modena_core::payment::PaymentOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One settlement attempt: which processor was asked, and what it said.
#[derive(Debug, Serialize)]
pub struct PaymentAttempt {
    pub processor: String,
    pub outcome: PaymentOutcome,
}

/// Machine-readable shape of a full run, emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub order_id: Uuid,
    pub cars: Vec<CarSummary>,
    pub grand_total: Decimal,
    pub payments: Vec<PaymentAttempt>,
}

#[derive(Debug, Serialize)]
pub struct CarSummary {
    pub name: String,
    pub base_price: Decimal,
    pub features_total: Decimal,
    pub total: Decimal,
}

/// One console line per payment outcome. Processors that settle against
/// a named merchant get the merchant echoed back.
pub fn payment_line(outcome: &PaymentOutcome) -> String {
    match outcome {
        PaymentOutcome::Accepted(receipt) => match &receipt.business_name {
            Some(merchant) => format!(
                "Payment of {} to {} accepted",
                format_usd(receipt.amount),
                merchant
            ),
            None => format!("Payment of {} accepted", format_usd(receipt.amount)),
        },
        PaymentOutcome::Declined { amount, reason } => {
            format!("Payment of {} declined: {}", format_usd(*amount), reason)
        }
    }
}

/// The full text report: banner, one block per car, the order total,
/// then a short section per settlement attempt.
pub fn text_report(
    blocks: &[Vec<String>],
    grand_total: Decimal,
    attempts: &[PaymentAttempt],
) -> String {
    let mut out = String::new();
    out.push_str("------------------ ORDER -------------------\n");
    for block in blocks {
        for line in block {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("--------------------------------------------\n");
    out.push_str(&format!("ORDER TOTAL: {}\n", format_usd(grand_total)));
    for attempt in attempts {
        out.push('\n');
        out.push_str(&format!("Checkout via {}:\n", attempt.processor));
        out.push_str(&payment_line(&attempt.outcome));
        out.push('\n');
    }
    out
}
