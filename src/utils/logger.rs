use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn build_filter(verbose: bool, configured_level: Option<&str>) -> EnvFilter {
    // RUST_LOG 優先，其次為設定檔的 level
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, configured_level) {
            (true, _) => "unit_converter=debug,warn".to_string(),
            (false, Some(level)) => format!("unit_converter={}", level),
            (false, None) => "unit_converter=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>, format: LogFormat) {
    let filter = build_filter(verbose, configured_level);

    // 日誌寫到 stderr，stdout 只留換算結果
    let result = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialised");
    }
}
