use serde::Deserialize;
use std::env;

use roamly_notion::NotionDatabases;
use roamly_paypal::PayPalConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub notion: NotionConfig,
    pub paypal: PayPalConfig,
    pub listing: ListingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "public".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotionConfig {
    pub api_key: String,
    pub databases: NotionDatabases,
}

/// Payment acceptance constants plus the heartbeat period. The fee is a
/// decimal string because the capture match is textual, not numeric.
#[derive(Debug, Deserialize, Clone)]
pub struct ListingRules {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_fee")]
    pub fee: String,
    #[serde(default = "default_heartbeat")]
    pub heartbeat_seconds: u64,
}

fn default_currency() -> String {
    roamly_paypal::EXPECTED_CURRENCY.to_string()
}

fn default_fee() -> String {
    roamly_paypal::LISTING_FEE.to_string()
}

fn default_heartbeat() -> u64 {
    300
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("ROAMLY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
