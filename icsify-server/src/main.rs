mod routes;
mod state;

use anyhow::Result;
use icsify_core::config::IcsifyConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = IcsifyConfig::load()?;
    let addr = config.server.bind_addr();
    let state = AppState::new(config);

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("icsify-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
