//! Configuration management for the fee engine
//!
//! Loads from optional config files + environment variables via .env

mod types;

pub use types::*;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::error::{FeeError, FeeResult};
use crate::fees::{
    CommissionCalculator, EventFeeResolver, DEFAULT_COMMISSION_RATE, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_FREE_LABEL,
};

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            commission: CommissionConfig {
                rate: DEFAULT_COMMISSION_RATE,
            },
            display: DisplayConfig {
                currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
                free_label: DEFAULT_FREE_LABEL.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Self::builder()?
            // Override with environment variables (STAIRS__*)
            .add_source(Environment::with_prefix("STAIRS").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Defaults plus optional `config/default` and `config/local` files
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let builder = Config::builder()
            // Commission defaults
            .set_default("commission.rate", DEFAULT_COMMISSION_RATE)?
            // Display defaults
            .set_default("display.currency_symbol", DEFAULT_CURRENCY_SYMBOL)?
            .set_default("display.free_label", DEFAULT_FREE_LABEL)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));
        Ok(builder)
    }

    /// Reject settings the calculators cannot work with
    pub fn validate(&self) -> FeeResult<()> {
        CommissionCalculator::with_rate(self.commission.rate)?;
        if self.display.free_label.trim().is_empty() {
            return Err(FeeError::InvalidConfig(
                "display.free_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn commission_calculator(&self) -> FeeResult<CommissionCalculator> {
        CommissionCalculator::with_rate(self.commission.rate)
    }

    pub fn event_fee_resolver(&self) -> EventFeeResolver {
        EventFeeResolver::new(
            self.display.currency_symbol.clone(),
            self.display.free_label.clone(),
        )
    }

    /// Generate a digest of the config for logging
    pub fn digest(&self) -> String {
        format!(
            "commission_rate={:.4} currency={} free_label={}",
            self.commission.rate, self.display.currency_symbol, self.display.free_label
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}
