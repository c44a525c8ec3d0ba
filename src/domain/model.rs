use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitDomain {
    Length,
    Weight,
    Temperature,
    Speed,
    Currency,
}

impl UnitDomain {
    pub const ALL: [UnitDomain; 5] = [
        UnitDomain::Length,
        UnitDomain::Weight,
        UnitDomain::Temperature,
        UnitDomain::Speed,
        UnitDomain::Currency,
    ];

    /// 顯示時的小數位數
    pub fn display_precision(&self) -> usize {
        match self {
            UnitDomain::Length | UnitDomain::Weight | UnitDomain::Speed => 6,
            UnitDomain::Temperature | UnitDomain::Currency => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnitDomain::Length => "length",
            UnitDomain::Weight => "weight",
            UnitDomain::Temperature => "temperature",
            UnitDomain::Speed => "speed",
            UnitDomain::Currency => "currency",
        }
    }
}

impl fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// 依名稱或符號 (C/F/K) 解析，不分大小寫
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|unit| {
            unit.name().to_ascii_lowercase() == needle
                || unit.name()[..1].to_ascii_lowercase() == needle
        })
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 正規化後的三碼貨幣代號
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// 去除空白並轉為大寫；不是三個 ASCII 字母時回傳 None
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().to_ascii_uppercase();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(code))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 單次請求取得的匯率，用完即丟
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateSnapshot {
    pub base: CurrencyCode,
    pub rates: HashMap<String, f64>,
}

impl ExchangeRateSnapshot {
    pub fn new(base: CurrencyCode, rates: HashMap<String, f64>) -> Self {
        Self { base, rates }
    }

    /// 零、負數或非有限值一律視為查無此代號
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates
            .get(code.as_str())
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConversionRequest {
    Length { value: f64, from: String, to: String },
    Weight { value: f64, from: String, to: String },
    Temperature { value: f64, from: TemperatureUnit, to: TemperatureUnit },
    Speed { value: f64, from: String, to: String },
    Currency { amount: f64, from: String, to: String },
}

impl ConversionRequest {
    pub fn domain(&self) -> UnitDomain {
        match self {
            ConversionRequest::Length { .. } => UnitDomain::Length,
            ConversionRequest::Weight { .. } => UnitDomain::Weight,
            ConversionRequest::Temperature { .. } => UnitDomain::Temperature,
            ConversionRequest::Speed { .. } => UnitDomain::Speed,
            ConversionRequest::Currency { .. } => UnitDomain::Currency,
        }
    }
}

/// 一次成功換算的結果，Display 即為顯示字串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub domain: UnitDomain,
    pub value: f64,
    pub from: String,
    pub result: f64,
    pub to: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.domain.display_precision();
        let degree = if self.domain == UnitDomain::Temperature {
            "°"
        } else {
            ""
        };
        // 輸入值以 Debug 輸出，整數也保留 ".0"
        write!(
            f,
            "{:?}{} {} = {:.*}{} {}",
            self.value, degree, self.from, precision, self.result, degree, self.to
        )
    }
}
