//! Configuration types

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub commission: CommissionConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// Gateway commission rate as a fraction (0.025 = 2.5%)
    pub rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for non-free fee labels
    pub currency_symbol: String,
    /// Label shown when an event costs nothing
    pub free_label: String,
}
