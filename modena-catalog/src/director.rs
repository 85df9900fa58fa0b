use modena_core::money::MoneyError;

use crate::builder::CarBuilder;
use crate::car::Car;
use crate::recipe::{self, CarRecipe};

/// Drives a builder through a recipe: name, base price, features,
/// build.
///
/// The director owns its builder. Constructions are independent; each
/// call pulls a fresh feature tree out of the recipe, so interleaved or
/// repeated builds yield structurally equal but distinct cars.
#[derive(Debug, Default)]
pub struct CarDirector {
    builder: CarBuilder,
}

impl CarDirector {
    pub fn new(builder: CarBuilder) -> Self {
        Self { builder }
    }

    pub fn construct(&mut self, recipe: &CarRecipe) -> Car {
        self.builder
            .name(recipe.car_name.clone())
            .base_price(recipe.base_price)
            .features(recipe.features.clone())
            .build()
    }

    pub fn construct_sports_car(&mut self) -> Result<Car, MoneyError> {
        Ok(self.construct(&recipe::sports_car()?))
    }

    pub fn construct_family_car(&mut self) -> Result<Car, MoneyError> {
        Ok(self.construct(&recipe::family_car()?))
    }

    pub fn construct_electric_car(&mut self) -> Result<Car, MoneyError> {
        Ok(self.construct(&recipe::electric_car()?))
    }
}
