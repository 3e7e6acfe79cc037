//! Coalition explorer server.
//!
//! Run with: cargo run -p coalition-server
//! Configure with `coalition.toml` or the file named by `COALITION_CONFIG`.

use coalition_config::AppConfig;
use coalition_server::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    coalition_console::init();

    let config = AppConfig::load_from_env()?;
    let state = AppState::from_config(&config)?;
    let router = app(state, config.server.static_dir.as_deref());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(event = "server_start", addr = %format!("http://{}", addr));

    axum::serve(listener, router).await?;
    Ok(())
}
