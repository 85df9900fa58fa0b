use rust_decimal::Decimal;
use serde::Deserialize;

/// Runtime settings: built-in defaults, overridden by an optional
/// `modena` file in the working directory, overridden in turn by
/// `MODENA`-prefixed environment variables.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    /// Largest amount the direct processor accepts.
    #[serde(default = "default_direct_cap")]
    pub direct_cap: Decimal,
    /// Merchant the legacy gateway settles against.
    #[serde(default = "default_business_name")]
    pub business_name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Optional catalog file; the built-in showroom is used when unset.
    pub path: Option<String>,
}

fn default_direct_cap() -> Decimal {
    Decimal::from(10_000)
}

fn default_business_name() -> String {
    "PERSONALIZED CARS".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            direct_cap: default_direct_cap(),
            business_name: default_business_name(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            // Local configuration file; optional on purpose, the CLI
            // runs out of the box.
            .add_source(config::File::with_name("modena").required(false))
            // Settings from the environment (with a prefix of MODENA)
            .add_source(config::Environment::with_prefix("MODENA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
