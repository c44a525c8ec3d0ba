use crate::domain::model::CurrencyCode;
use crate::domain::ports::RateProvider;
use crate::utils::error::{ConverterError, Result};

pub struct CurrencyConverter<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> CurrencyConverter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    fn provider(&self) -> &P {
        &self.provider
    }

    /// 每次換算都重新抓取匯率，不快取
    pub async fn convert(&self, amount: f64, from_code: &str, to_code: &str) -> Result<f64> {
        let from = parse_code(from_code)?;
        let to = parse_code(to_code)?;

        tracing::debug!("Fetching rates for base {}", from);
        let snapshot = self.provider.latest_rates(&from).await.map_err(|e| {
            tracing::warn!("Rate fetch for {} failed: {}", from, e);
            ConverterError::Fetch(e)
        })?;

        match snapshot.rate_for(&to) {
            Some(rate) => {
                tracing::debug!("Rate {} -> {} = {}", from, to, rate);
                Ok(amount * rate)
            }
            None => {
                tracing::warn!("Rate service has no usable rate for {}", to);
                Err(ConverterError::InvalidCurrencyCode {
                    code: to.to_string(),
                })
            }
        }
    }
}

fn parse_code(input: &str) -> Result<CurrencyCode> {
    CurrencyCode::parse(input).ok_or_else(|| ConverterError::InvalidCurrencyCode {
        code: input.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExchangeRateSnapshot;
    use crate::utils::error::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StaticRates {
        rates: HashMap<String, f64>,
        requested: Mutex<Vec<String>>,
    }

    impl StaticRates {
        fn new(pairs: &[(&str, f64)]) -> Self {
            Self {
                rates: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RateProvider for StaticRates {
        async fn latest_rates(
            &self,
            base: &CurrencyCode,
        ) -> std::result::Result<ExchangeRateSnapshot, FetchError> {
            self.requested.lock().unwrap().push(base.to_string());
            Ok(ExchangeRateSnapshot::new(base.clone(), self.rates.clone()))
        }
    }

    struct FailingRates;

    #[async_trait]
    impl RateProvider for FailingRates {
        async fn latest_rates(
            &self,
            _base: &CurrencyCode,
        ) -> std::result::Result<ExchangeRateSnapshot, FetchError> {
            Err(FetchError::Connect {
                message: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_convert_with_known_rate() {
        let converter = CurrencyConverter::new(StaticRates::new(&[("EUR", 0.9)]));
        let result = converter.convert(100.0, "USD", "EUR").await.unwrap();
        assert!((result - 90.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_codes_are_uppercased() {
        let converter = CurrencyConverter::new(StaticRates::new(&[("EUR", 0.9)]));
        let lower = converter.convert(10.0, "usd", "eur").await.unwrap();
        let upper = converter.convert(10.0, "USD", "EUR").await.unwrap();
        assert_eq!(lower, upper);
        assert_eq!(
            *converter.provider().requested.lock().unwrap(),
            vec!["USD".to_string(), "USD".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_target_is_invalid_code() {
        let converter = CurrencyConverter::new(StaticRates::new(&[("EUR", 0.9)]));
        let err = converter.convert(1.0, "USD", "GBP").await.unwrap_err();
        assert!(matches!(err, ConverterError::InvalidCurrencyCode { ref code } if code == "GBP"));
    }

    #[tokio::test]
    async fn test_malformed_code_skips_network() {
        let converter = CurrencyConverter::new(StaticRates::new(&[("EUR", 0.9)]));
        let err = converter.convert(1.0, "US", "EUR").await.unwrap_err();
        assert!(matches!(err, ConverterError::InvalidCurrencyCode { .. }));
        assert!(converter.provider().requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_fetch_error() {
        let converter = CurrencyConverter::new(FailingRates);
        let err = converter.convert(1.0, "USD", "EUR").await.unwrap_err();
        assert!(matches!(err, ConverterError::Fetch(FetchError::Connect { .. })));
        assert_eq!(err.user_friendly_message(), "Error fetching exchange rate!");
    }
}
