use moafinder_api::{ApiServer, AppState, ConfigLoader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::new().load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting MOA Finder API...");

    let state = AppState::mall_of_asia()?;
    ApiServer::new(config, state)?.run().await?;
    Ok(())
}
