use cart_store::config::AppConfig;
use cart_store::shell::{build_state, http::router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = build_state(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    info!(addr = %listener.local_addr()?, catalog = %config.catalog_url, "cart store listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
