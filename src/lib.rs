//! STAIRS Fees Library
//!
//! Gateway commission and event fee resolution for STAIRS Talent Hub

pub mod coerce;
pub mod config;
pub mod error;
pub mod fees;
pub mod types;

pub use error::{FeeError, FeeResult};
pub use fees::{CommissionCalculator, EventFeeResolver};
