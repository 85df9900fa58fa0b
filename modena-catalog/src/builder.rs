use std::mem;

use modena_core::money::Price;

use crate::car::Car;
use crate::feature::FeatureGroup;

/// Step-by-step construction of a [`Car`].
///
/// Setters run in any order, any number of times; the last write wins.
/// `build` hands the accumulated car out and leaves the builder holding
/// a fresh empty one, so a single builder serves any number of
/// constructions without leaking state between them.
#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.car.name = Some(name.into());
        self
    }

    pub fn base_price(&mut self, price: Price) -> &mut Self {
        self.car.base_price = Some(price);
        self
    }

    pub fn features(&mut self, features: FeatureGroup) -> &mut Self {
        self.car.features = Some(features);
        self
    }

    /// Hands the accumulated car over and resets in the same move.
    pub fn build(&mut self) -> Car {
        mem::take(&mut self.car)
    }
}
