use crate::domain::model::TemperatureUnit;

/// 三種溫標之間六種非恆等轉換，窮舉即完整
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureConversion {
    CelsiusToFahrenheit,
    CelsiusToKelvin,
    FahrenheitToCelsius,
    FahrenheitToKelvin,
    KelvinToCelsius,
    KelvinToFahrenheit,
}

impl TemperatureConversion {
    /// 相同單位回傳 None
    pub fn between(from: TemperatureUnit, to: TemperatureUnit) -> Option<Self> {
        use TemperatureUnit::*;
        match (from, to) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => None,
            (Celsius, Fahrenheit) => Some(Self::CelsiusToFahrenheit),
            (Celsius, Kelvin) => Some(Self::CelsiusToKelvin),
            (Fahrenheit, Celsius) => Some(Self::FahrenheitToCelsius),
            (Fahrenheit, Kelvin) => Some(Self::FahrenheitToKelvin),
            (Kelvin, Celsius) => Some(Self::KelvinToCelsius),
            (Kelvin, Fahrenheit) => Some(Self::KelvinToFahrenheit),
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::CelsiusToFahrenheit => (x * 9.0 / 5.0) + 32.0,
            Self::CelsiusToKelvin => x + 273.15,
            Self::FahrenheitToCelsius => (x - 32.0) * 5.0 / 9.0,
            Self::FahrenheitToKelvin => (x - 32.0) * 5.0 / 9.0 + 273.15,
            Self::KelvinToCelsius => x - 273.15,
            Self::KelvinToFahrenheit => (x - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }
}

pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match TemperatureConversion::between(from, to) {
        Some(conversion) => conversion.apply(value),
        None => value,
    }
}
