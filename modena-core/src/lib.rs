pub mod legacy;
pub mod money;
pub mod payment;

pub use legacy::{GatewayResponse, LegacyGateway, LegacyGatewayAdapter};
pub use money::{format_usd, MoneyError, Price};
pub use payment::{
    checkout, DeclineReason, DirectProcessor, PaymentOutcome, PaymentProcessor, PaymentReceipt,
};
