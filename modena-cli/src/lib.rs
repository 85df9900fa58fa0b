pub mod app_config;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rust_decimal::Decimal;

use modena_catalog::builder::CarBuilder;
use modena_catalog::director::CarDirector;
use modena_catalog::recipe::{standard_catalog, Catalog};
use modena_core::legacy::{LegacyGateway, LegacyGatewayAdapter};
use modena_core::money::{format_usd, Price};
use modena_core::payment::{checkout, DirectProcessor};
use modena_order::order::Order;

use crate::app_config::Config;
use crate::render::{CarSummary, OutputFormat, PaymentAttempt, RunSummary};

/// Resolves the catalog: an explicit path wins over the configured one,
/// and the built-in showroom backs both.
pub fn load_catalog(config: &Config, override_path: Option<&Path>) -> anyhow::Result<Catalog> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.path.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read catalog file {}", path.display()))?;
            let catalog: Catalog = serde_json::from_str(&raw)
                .with_context(|| format!("malformed catalog file {}", path.display()))?;
            tracing::info!(
                "loaded {} recipes from {}",
                catalog.recipes.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => Ok(standard_catalog()?),
    }
}

/// Builds every recipe into one order, walks it in canonical name
/// order, and settles the grand total through the direct processor and
/// the legacy gateway in turn.
pub fn run(config: &Config, catalog: &Catalog, format: OutputFormat) -> anyhow::Result<String> {
    let mut director = CarDirector::new(CarBuilder::new());
    let order = Order::new();
    for recipe in &catalog.recipes {
        order.add_item(director.construct(recipe));
    }
    tracing::info!("order {} opened with {} cars", order.id, order.len());

    let mut blocks = Vec::new();
    let mut summaries = Vec::new();
    let mut grand_total = Decimal::ZERO;
    let mut traversal = order.create_iterator();
    while traversal.has_next() {
        let car = traversal.try_next()?;
        let total = car.total_price()?;
        grand_total += total;
        blocks.push(car.detail_lines()?);
        summaries.push(CarSummary {
            name: car.name.clone().unwrap_or_default(),
            base_price: car.base_price.map(|p| p.amount()).unwrap_or_default(),
            features_total: car.features.as_ref().map(|f| f.price()).unwrap_or_default(),
            total,
        });
    }
    tracing::info!("order {} totals {}", order.id, format_usd(grand_total));

    let direct = DirectProcessor::new(Price::new(config.payment.direct_cap)?);
    let gateway = LegacyGatewayAdapter::new(
        LegacyGateway::new(),
        config.payment.business_name.clone(),
    );
    let attempts = vec![
        PaymentAttempt {
            processor: "direct processor".to_string(),
            outcome: checkout(&direct, grand_total),
        },
        PaymentAttempt {
            processor: "legacy gateway".to_string(),
            outcome: checkout(&gateway, grand_total),
        },
    ];

    match format {
        OutputFormat::Text => Ok(render::text_report(&blocks, grand_total, &attempts)),
        OutputFormat::Json => {
            let summary = RunSummary {
                order_id: order.id,
                cars: summaries,
                grand_total,
                payments: attempts,
            };
            Ok(serde_json::to_string_pretty(&summary)?)
        }
    }
}
