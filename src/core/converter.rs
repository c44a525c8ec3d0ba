use crate::core::currency::CurrencyConverter;
use crate::core::ratio::{self, RatioTable, LENGTH_TABLE, SPEED_TABLE, WEIGHT_TABLE};
use crate::core::temperature::convert_temperature;
use crate::core::RateProvider;
use crate::domain::model::{Conversion, ConversionRequest, CurrencyCode, UnitDomain};
use crate::utils::error::Result;

pub struct UnitConverter<P: RateProvider> {
    currency: CurrencyConverter<P>,
}

impl<P: RateProvider> UnitConverter<P> {
    pub fn new(provider: P) -> Self {
        Self {
            currency: CurrencyConverter::new(provider),
        }
    }

    pub async fn convert(&self, request: ConversionRequest) -> Result<Conversion> {
        let domain = request.domain();
        tracing::debug!("Converting {:?}", request);

        let conversion = match request {
            ConversionRequest::Length { value, from, to } => {
                convert_ratio(value, &from, &to, &LENGTH_TABLE)?
            }
            ConversionRequest::Weight { value, from, to } => {
                convert_ratio(value, &from, &to, &WEIGHT_TABLE)?
            }
            ConversionRequest::Speed { value, from, to } => {
                convert_ratio(value, &from, &to, &SPEED_TABLE)?
            }
            ConversionRequest::Temperature { value, from, to } => Conversion {
                domain,
                value,
                from: from.to_string(),
                result: convert_temperature(value, from, to),
                to: to.to_string(),
            },
            ConversionRequest::Currency { amount, from, to } => {
                let result = self.currency.convert(amount, &from, &to).await?;
                Conversion {
                    domain,
                    value: amount,
                    from: display_code(&from),
                    result,
                    to: display_code(&to),
                }
            }
        };

        tracing::debug!("Result: {}", conversion);
        Ok(conversion)
    }
}

// 以正式名稱顯示，讓 "km" 輸出為 "Kilometers"
fn convert_ratio(value: f64, from: &str, to: &str, table: &RatioTable) -> Result<Conversion> {
    let from_unit = table.resolve_or_err(from)?;
    let to_unit = table.resolve_or_err(to)?;
    Ok(Conversion {
        domain: table.domain,
        value,
        from: from_unit.name.to_string(),
        result: ratio::convert(value, from_unit.name, to_unit.name, table)?,
        to: to_unit.name.to_string(),
    })
}

fn display_code(input: &str) -> String {
    CurrencyCode::parse(input)
        .map(|code| code.to_string())
        .unwrap_or_else(|| input.trim().to_ascii_uppercase())
}

/// `units` 子命令使用的單位清單
pub fn unit_names(domain: UnitDomain) -> Vec<&'static str> {
    match RatioTable::for_domain(domain) {
        Some(table) => table.unit_names(),
        None if domain == UnitDomain::Temperature => crate::domain::model::TemperatureUnit::ALL
            .iter()
            .map(|unit| unit.name())
            .collect(),
        None => vec!["Any three-letter ISO 4217 code (e.g. USD, EUR, GBP, INR)"],
    }
}
