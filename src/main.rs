// FUNGIBLES SERVICE - ENTRY POINT
// Binds the HTTP listener and wires the chain and Neynar clients.

use std::sync::Arc;

use fungibles_service::chain::RpcChainClient;
use fungibles_service::config::Config;
use fungibles_service::neynar::NeynarClient;
use fungibles_service::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fungibles Service v1.0");

    let config = Config::from_env()?;
    let chain = RpcChainClient::new(&config.rpc_url)?;
    let publisher = NeynarClient::new(config.neynar_api_key.clone());

    let state = AppState {
        config: Arc::new(config),
        chain: Arc::new(chain),
        publisher: Arc::new(publisher),
    };

    let addr = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    info!("Fungibles Service running on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
