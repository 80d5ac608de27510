//! Error types for the fee engine
//!
//! Calculations never fail; these errors only surface when a calculator or
//! the application configuration is built from invalid settings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeeError {
    /// Commission rate outside `[0, 1)` or not a finite number
    #[error("invalid commission rate {0}: expected a finite value in [0, 1)")]
    InvalidRate(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type FeeResult<T> = std::result::Result<T, FeeError>;
