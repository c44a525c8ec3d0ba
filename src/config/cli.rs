use crate::domain::model::{ConversionRequest, TemperatureUnit, UnitDomain};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_non_negative};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "unit-converter")]
#[command(about = "Convert length, weight, temperature, speed and currency values")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base URL of the exchange-rate service")]
    pub rate_endpoint: Option<String>,

    #[arg(long, global = true, help = "Timeout for the exchange-rate request")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Meters, Kilometers, Miles, Yards, Feet, Inches
    Length(RatioArgs),
    /// Kilograms, Grams, Pounds, Ounces
    Weight(RatioArgs),
    /// Celsius, Fahrenheit, Kelvin
    Temperature(TemperatureArgs),
    /// Meters per Second, Kilometers per Hour, Miles per Hour, Feet per Second
    Speed(RatioArgs),
    /// Live exchange rates, e.g. `currency 100 USD EUR`
    Currency(CurrencyArgs),
    /// List supported units
    Units {
        #[arg(value_enum)]
        domain: Option<DomainArg>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RatioArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Args)]
pub struct TemperatureArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    #[arg(value_parser = parse_temperature_unit)]
    pub from: TemperatureUnit,
    #[arg(value_parser = parse_temperature_unit)]
    pub to: TemperatureUnit,
}

#[derive(Debug, Clone, Args)]
pub struct CurrencyArgs {
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DomainArg {
    Length,
    Weight,
    Temperature,
    Speed,
    Currency,
}

impl From<DomainArg> for UnitDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Length => UnitDomain::Length,
            DomainArg::Weight => UnitDomain::Weight,
            DomainArg::Temperature => UnitDomain::Temperature,
            DomainArg::Speed => UnitDomain::Speed,
            DomainArg::Currency => UnitDomain::Currency,
        }
    }
}

fn parse_temperature_unit(input: &str) -> std::result::Result<TemperatureUnit, String> {
    TemperatureUnit::parse(input)
        .ok_or_else(|| format!("'{}' is not one of Celsius, Fahrenheit, Kelvin", input))
}

impl Command {
    /// 轉成換算請求；`units` 沒有對應請求
    pub fn to_request(&self) -> Result<Option<ConversionRequest>> {
        let request = match self {
            Command::Length(args) => {
                validate_non_negative("value", args.value)?;
                ConversionRequest::Length {
                    value: args.value,
                    from: args.from.clone(),
                    to: args.to.clone(),
                }
            }
            Command::Weight(args) => {
                validate_non_negative("value", args.value)?;
                ConversionRequest::Weight {
                    value: args.value,
                    from: args.from.clone(),
                    to: args.to.clone(),
                }
            }
            Command::Speed(args) => {
                validate_non_negative("value", args.value)?;
                ConversionRequest::Speed {
                    value: args.value,
                    from: args.from.clone(),
                    to: args.to.clone(),
                }
            }
            // 溫度允許負值
            Command::Temperature(args) => {
                validate_finite("value", args.value)?;
                ConversionRequest::Temperature {
                    value: args.value,
                    from: args.from,
                    to: args.to,
                }
            }
            Command::Currency(args) => {
                validate_non_negative("amount", args.amount)?;
                ConversionRequest::Currency {
                    amount: args.amount,
                    from: args.from.clone(),
                    to: args.to.clone(),
                }
            }
            Command::Units { .. } => return Ok(None),
        };
        Ok(Some(request))
    }
}
