//! HTTP server for trail-watch
//!
//! Provides REST API endpoints for hazard queries plus static hosting
//! for the app shell.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::Result;
use crate::hazard::store::HazardStore;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Resolve the hazard store path from configuration
///
/// Relative store files live under the app data directory.
fn store_path(config: &Config) -> Result<PathBuf> {
    let file = PathBuf::from(&config.server.store_file);
    if file.is_absolute() {
        Ok(file)
    } else {
        Ok(HazardStore::data_dir()?.join(file))
    }
}

/// Start the HTTP server
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    run_on(&addr, config).await
}

/// Start the HTTP server with a specific address
///
/// Useful for tests or when you want to override config
pub async fn run_on(addr: &str, config: Config) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| crate::error::Error::Server(format!("Invalid server address: {}", e)))?;

    let path = store_path(&config)?;
    let store = HazardStore::load_from(path.clone())?;
    info!(
        "Loaded {} hazards from {}",
        store.len(),
        path.display()
    );

    let state = Arc::new(AppState::new(config, store));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
