use crate::domain::model::{CurrencyCode, ExchangeRateSnapshot};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// 取得以 `base` 為基準的最新匯率；每次呼叫都是一次獨立請求
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateSnapshot, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn rate_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
