use clap::Parser;
use tarot_oracle::domain::ports::ConfigProvider;
use tarot_oracle::utils::error::TarotError;
use tarot_oracle::utils::logger::{self, LogFormat};
use tarot_oracle::utils::validation::Validate;
use tarot_oracle::{api, AppState, CliConfig, ReadingOrchestrator, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(cli.json_logs), cli.verbose);

    tracing::info!("Starting tarot-oracle");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 啟動前驗證配置，請求期間不再檢查
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::info!("✅ Configuration validated");

    let orchestrator = match ReadingOrchestrator::from_config(settings.as_ref()) {
        Ok(orchestrator) => orchestrator,
        Err(e) => fail(&e),
    };
    let state = AppState::new(orchestrator, settings.static_dir());

    api::run(settings.host(), settings.port(), state).await?;
    Ok(())
}

fn load_settings(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>, TarotError> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}

fn fail(e: &TarotError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
