use thiserror::Error;

/// 匯率服務呼叫失敗的細分原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Rate service timed out: {url}")]
    Timeout { url: String },

    #[error("Could not connect to rate service: {message}")]
    Connect { message: String },

    #[error("Rate service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed rate response: {message}")]
    Malformed { message: String },

    #[error("Rate request failed: {message}")]
    Request { message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            FetchError::Timeout { url }
        } else if e.is_connect() {
            FetchError::Connect {
                message: e.to_string(),
            }
        } else if let Some(status) = e.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else if e.is_decode() || e.is_body() {
            FetchError::Malformed {
                message: e.to_string(),
            }
        } else {
            FetchError::Request {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed {
            message: e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Unknown {domain} unit: {unit}")]
    UnknownUnit { domain: String, unit: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid currency code: {code}")]
    InvalidCurrencyCode { code: String },

    #[error("Exchange rate fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConverterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConverterError::UnknownUnit { .. }
            | ConverterError::InvalidValue { .. }
            | ConverterError::InvalidCurrencyCode { .. } => ErrorCategory::Input,
            ConverterError::Fetch(_) => ErrorCategory::Network,
            ConverterError::ConfigError { .. }
            | ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConverterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：輸入錯誤 1、匯率抓取失敗 2、設定或系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 顯示給使用者的訊息，匯率相關錯誤一律收斂成單一訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConverterError::InvalidCurrencyCode { .. } => "Invalid currency code!".to_string(),
            ConverterError::Fetch(_) => "Error fetching exchange rate!".to_string(),
            ConverterError::UnknownUnit { domain, unit } => {
                format!("'{}' is not a supported {} unit", unit, domain)
            }
            ConverterError::InvalidValue { field, reason } => format!("{}: {}", field, reason),
            ConverterError::IoError(e) => format!("File access failed: {}", e),
            ConverterError::ConfigError { message } => format!("Configuration problem: {}", message),
            ConverterError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            ConverterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConverterError::UnknownUnit { .. } => {
                "Run `unit-converter units` to list the supported units"
            }
            ConverterError::InvalidValue { .. } => "Enter a finite, non-negative number",
            ConverterError::InvalidCurrencyCode { .. } => {
                "Use a three-letter ISO 4217 code such as USD, EUR or GBP"
            }
            ConverterError::Fetch(FetchError::Timeout { .. }) => {
                "The rate service is slow; retry or raise --timeout-seconds"
            }
            ConverterError::Fetch(_) => {
                "Check your network connection and the --rate-endpoint setting"
            }
            ConverterError::IoError(_) => "Check that the file exists and is readable",
            ConverterError::ConfigError { .. }
            | ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
