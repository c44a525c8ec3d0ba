#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest";

/// 命令列與設定檔合併後的執行設定
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSettings {
    pub rate_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            rate_endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            timeout_seconds: None,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl ConverterSettings {
    /// 命令列參數覆蓋設定檔
    pub fn resolve(
        config_path: Option<&Path>,
        rate_endpoint: Option<&str>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                validation::validate_path("config", &path.to_string_lossy())?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let settings = Self {
            rate_endpoint: rate_endpoint
                .or(file.endpoint())
                .unwrap_or(DEFAULT_RATE_ENDPOINT)
                .to_string(),
            timeout_seconds: timeout_seconds.or(file.timeout_seconds()),
            log_level: file.log_level().map(str::to_string),
            log_format: file.log_format()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for ConverterSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("rate_endpoint", &self.rate_endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

impl ConfigProvider for ConverterSettings {
    fn rate_endpoint(&self) -> &str {
        &self.rate_endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
