use clap::Parser;
use unit_converter::config::cli::Command;
use unit_converter::core::converter::unit_names;
use unit_converter::utils::logger::{self, LogFormat};
use unit_converter::{
    CliConfig, ConverterError, ConverterSettings, HttpRateProvider, UnitConverter, UnitDomain,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先讀設定，日誌等級可能來自設定檔
    let settings = match ConverterSettings::resolve(
        cli.config.as_deref(),
        cli.rate_endpoint.as_deref(),
        cli.timeout_seconds,
    ) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None, LogFormat::Compact);
            report_and_exit(&e);
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref(), settings.log_format);
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Settings: {:?}", settings);

    if let Command::Units { domain } = &cli.command {
        let domains = match domain {
            Some(domain) => vec![UnitDomain::from(*domain)],
            None => UnitDomain::ALL.to_vec(),
        };
        for domain in domains {
            println!("{}: {}", domain, unit_names(domain).join(", "));
        }
        return Ok(());
    }

    let request = match cli.command.to_request() {
        Ok(Some(request)) => request,
        Ok(None) => return Ok(()),
        Err(e) => report_and_exit(&e),
    };

    let provider = match HttpRateProvider::new(&settings) {
        Ok(provider) => provider,
        Err(e) => report_and_exit(&ConverterError::Fetch(e)),
    };
    let converter = UnitConverter::new(provider);

    match converter.convert(request).await {
        Ok(conversion) => {
            tracing::info!("✅ {}", conversion);
            println!("{}", conversion);
        }
        Err(e) => report_and_exit(&e),
    }

    Ok(())
}

fn report_and_exit(e: &ConverterError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
