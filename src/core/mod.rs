pub mod converter;
pub mod currency;
pub mod ratio;
pub mod temperature;

pub use crate::domain::model::{Conversion, ConversionRequest, ExchangeRateSnapshot};
pub use crate::domain::ports::{ConfigProvider, RateProvider};
pub use crate::utils::error::Result;
