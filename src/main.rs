use clap::Parser;
use soi_consulta::utils::{logger, validation::Validate};
use soi_consulta::{create_router, AppState, CliConfig, QueryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);
    tracing::info!("Starting soi-consulta");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = config.socket_addr()?;
    let client = QueryClient::new(config.query.clone())?;
    tracing::info!(
        endpoint = %client.config().endpoint,
        timeout_secs = client.config().timeout.as_secs(),
        "📡 Query client ready"
    );

    let app = create_router(AppState::new(client));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("✅ Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
