use crate::core::{ConfigProvider, ExchangeRateSnapshot, RateProvider};
use crate::domain::model::CurrencyCode;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    base: Option<String>,
    rates: HashMap<String, f64>,
}

/// 透過 `GET {endpoint}/{BASE}` 取得匯率
pub struct HttpRateProvider {
    endpoint: String,
    client: Client,
}

impl HttpRateProvider {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Request {
            message: e.to_string(),
        })?;

        Ok(Self {
            endpoint: config.rate_endpoint().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, base: &CurrencyCode) -> String {
        format!("{}/{}", self.endpoint, base)
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateSnapshot, FetchError> {
        let url = self.url_for(base);
        tracing::debug!("Making rate request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Rate response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // 先讀成文字再解析，才能把格式錯誤與傳輸錯誤分開
        let body = response.text().await?;
        let parsed: LatestRatesResponse = serde_json::from_str(&body)?;

        if let Some(reported) = parsed.base.as_deref() {
            if !reported.eq_ignore_ascii_case(base.as_str()) {
                tracing::warn!("Rate service reported base {} for request {}", reported, base);
            }
        }

        Ok(ExchangeRateSnapshot::new(base.clone(), parsed.rates))
    }
}
