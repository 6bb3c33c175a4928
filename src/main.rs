use anyhow::Context;
use clap::Parser;
use staff_report::core::ConfigProvider;
use staff_report::utils::error::{ErrorSeverity, ReportError};
use staff_report::utils::{logger, validation::Validate};
use staff_report::{adapters, CliConfig, ConsoleSink, ReportEngine, TomlConfig};

fn exit_code(error: &ReportError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: ReportError) -> ! {
    tracing::error!(
        "❌ Staff report failed: {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(&error));
}

fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), ReportError> {
    config.validate()?;

    let format = config.output_format();
    let engine = ReportEngine::new(config);
    let report = engine.run()?;

    let mut sink = ConsoleSink::new();
    adapters::publish(&report, format, &mut sink)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            run(config)
        }
        None => run(cli),
    };

    if let Err(error) = outcome {
        fail(error);
    }
    Ok(())
}
