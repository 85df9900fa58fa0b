use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use modena_core::money::{format_usd, Price};

use crate::feature::FeatureGroup;

/// A configured car: a name, a base price, and a root feature group.
///
/// Every field stays unset until a builder hands it over. Pricing and
/// display refuse to run on a partially built car instead of guessing
/// at defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub name: Option<String>,
    pub base_price: Option<Price>,
    pub features: Option<FeatureGroup>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("car is not fully built: {missing} is unset")]
    Unbuilt { missing: &'static str },
}

impl Car {
    fn require<'a, T>(field: &'a Option<T>, missing: &'static str) -> Result<&'a T, CarError> {
        field.as_ref().ok_or(CarError::Unbuilt { missing })
    }

    /// Base price plus the recursive price of the feature tree.
    pub fn total_price(&self) -> Result<Decimal, CarError> {
        Self::require(&self.name, "name")?;
        let base = Self::require(&self.base_price, "base price")?;
        let features = Self::require(&self.features, "features")?;
        Ok(base.amount() + features.price())
    }

    /// Console block for this car: name, base price, the full feature
    /// tree, then the total.
    pub fn detail_lines(&self) -> Result<Vec<String>, CarError> {
        let name = Self::require(&self.name, "name")?;
        let base = Self::require(&self.base_price, "base price")?;
        let features = Self::require(&self.features, "features")?;

        let total = base.amount() + features.price();
        let mut lines = vec![
            format!("Car: {name}"),
            format!("Base Price: {}", format_usd(base.amount())),
        ];
        lines.extend(features.display_lines(0));
        lines.push(format!("Total: {}", format_usd(total)));
        Ok(lines)
    }
}
