use serde::Deserialize;
use std::env;

use dwella_catalog::{DeliveryZone, ZoneTable};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub paystack: PaystackConfig,
    pub flutterwave: FlutterwaveConfig,
    /// Optional wholesale replacement of the built-in delivery-zone table.
    #[serde(default)]
    pub delivery_zones: Option<Vec<DeliveryZone>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Digits only, country code included (e.g. 2349137487240).
    pub whatsapp_number: String,
    /// Base URL the gateways redirect back to after checkout.
    pub callback_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaystackConfig {
    pub public_key: String,
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlutterwaveConfig {
    pub public_key: String,
    pub secret_key: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `DWELLA__STORE__WHATSAPP_NUMBER=...`
            .add_source(config::Environment::with_prefix("DWELLA").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// The zone table to run with: the configured override when present,
    /// otherwise the built-in coverage map.
    pub fn zone_table(&self) -> ZoneTable {
        match &self.delivery_zones {
            Some(zones) => ZoneTable::new(zones.clone()),
            None => ZoneTable::default(),
        }
    }
}
