use rearrange_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rearrange_server=info,order_sync=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(db = %config.db_path.display(), tokens = config.sessions.len(), "Starting rearrange-server");

    rearrange_server::run(config).await
}
