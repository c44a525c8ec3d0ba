pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::HttpRateProvider;
pub use crate::config::ConverterSettings;
pub use crate::core::{converter::UnitConverter, currency::CurrencyConverter};
pub use crate::domain::model::{Conversion, ConversionRequest, TemperatureUnit, UnitDomain};
pub use crate::utils::error::{ConverterError, FetchError, Result};
