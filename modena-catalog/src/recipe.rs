use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use modena_core::money::{MoneyError, Price};

use crate::feature::{FeatureGroup, FeatureItem};

/// One catalog entry: everything a director needs to assemble a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecipe {
    pub car_name: String,
    pub base_price: Price,
    pub features: FeatureGroup,
}

/// A set of car recipes, either built in or loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub recipes: Vec<CarRecipe>,
}

/// The built-in showroom: three variants assembled from the nine
/// standard features.
///
/// Every call produces fresh trees. No recipe shares a node with
/// another, so mutating one built car never shows through elsewhere.
pub fn standard_catalog() -> Result<Catalog, MoneyError> {
    Ok(Catalog {
        recipes: vec![sports_car()?, family_car()?, electric_car()?],
    })
}

pub fn sports_car() -> Result<CarRecipe, MoneyError> {
    let mut tech = FeatureGroup::new("Tech Features");
    tech.add_feature(FeatureItem::new("Premium Sound System", dec!(1500.99))?);
    tech.add_feature(FeatureItem::new("Bluetooth Connectivity", dec!(1200.99))?);

    let mut paint = FeatureGroup::new("Paint Job");
    paint.add_feature(FeatureItem::new("Red Paint", dec!(1000.99))?);
    paint.add_feature(FeatureItem::new("Blue Paint", dec!(1000.99))?);

    let mut features = FeatureGroup::new("Personalized Sports Car Features");
    features.add_feature(FeatureItem::new("Turbo Engine", dec!(2000.50))?);
    features.add_feature(tech);
    features.add_feature(paint);

    Ok(CarRecipe {
        car_name: "Sports Car".to_string(),
        base_price: Price::new(dec!(60000))?,
        features,
    })
}

pub fn family_car() -> Result<CarRecipe, MoneyError> {
    let mut tech = FeatureGroup::new("Tech Features");
    tech.add_feature(FeatureItem::new("Bluetooth Connectivity", dec!(1200.99))?);

    let mut features = FeatureGroup::new("Personalized Family Car Features");
    features.add_feature(FeatureItem::new("Heated Seats", dec!(1500.99))?);
    features.add_feature(tech);

    Ok(CarRecipe {
        car_name: "Family Car".to_string(),
        base_price: Price::new(dec!(40000))?,
        features,
    })
}

pub fn electric_car() -> Result<CarRecipe, MoneyError> {
    let mut tech = FeatureGroup::new("Tech Features");
    tech.add_feature(FeatureItem::new("Proximity Sensor", dec!(800.99))?);
    tech.add_feature(FeatureItem::new("Bluetooth Connectivity", dec!(1200.99))?);
    tech.add_feature(FeatureItem::new("LCD Screen", dec!(500.89))?);

    let mut features = FeatureGroup::new("Personalized Electric Car Features");
    features.add_feature(FeatureItem::new("Electric Engine", dec!(1399.99))?);
    features.add_feature(tech);

    Ok(CarRecipe {
        car_name: "Electric Car".to_string(),
        base_price: Price::new(dec!(50000))?,
        features,
    })
}
