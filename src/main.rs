use clap::Parser;
use nz_walks::core::ConfigProvider;
use nz_walks::utils::validation::{validate_socket_addr, Validate};
use nz_walks::utils::logger;
use nz_walks::{ApiServer, AppState, CliConfig, Database, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            // 載入 TOML 配置
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            config.apply_log_overrides(cli.verbose, cli.json_logs);
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    logger::init_logger(config.log_level(), config.json_logs());

    tracing::info!("🚀 Starting nz-walks API");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = validate_socket_addr("bind_address", config.bind_address())?;

    let database = Database::connect(config.database_url(), config.max_connections()).await?;
    database.ensure_schema().await?;

    let listener = ApiServer::bind(addr).await?;
    let server = ApiServer::new(AppState::from_database(&database));

    if let Err(e) = server.serve(listener).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        database.close().await;
        return Err(e.into());
    }

    database.close().await;
    Ok(())
}
