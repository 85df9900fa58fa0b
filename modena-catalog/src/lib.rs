pub mod builder;
pub mod car;
pub mod director;
pub mod feature;
pub mod recipe;

pub use builder::CarBuilder;
pub use car::{Car, CarError};
pub use director::CarDirector;
pub use feature::{Feature, FeatureGroup, FeatureItem};
pub use recipe::{standard_catalog, CarRecipe, Catalog};
