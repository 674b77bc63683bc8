//! Indicator data retrieval.

pub mod worldbank;

pub use worldbank::{IndicatorSource, WorldBankClient};
