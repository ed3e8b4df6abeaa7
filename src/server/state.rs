//! Server shared state
//!
//! Holds configuration and the hazard store for the HTTP server.

use crate::config::Config;
use crate::hazard::store::HazardStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// Hazard and location records
    pub store: RwLock<HazardStore>,

    /// Directory the app shell and other assets are served from
    pub static_dir: String,

    /// Token required for write endpoints; writes are disabled when unset
    admin_token: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, store: HazardStore) -> Self {
        let token = config.api.admin_token.trim();
        let admin_token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
        let static_dir = resolve_static_dir(&config.server.static_dir);
        Self {
            config: Arc::new(RwLock::new(config)),
            store: RwLock::new(store),
            static_dir,
            admin_token,
        }
    }

    /// Whether a bearer token authorizes write access
    ///
    /// With no token configured, nothing authorizes.
    pub fn is_admin(&self, bearer: Option<&str>) -> bool {
        match (&self.admin_token, bearer) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}

/// Resolve the configured static directory to a path that exists
///
/// The configured value wins when it exists (relative to cwd or
/// absolute); otherwise the same name is tried next to the executable.
/// Both routes and the app shell handler read the resolved value, so `/`
/// and `/location/:id` always serve the same shell.
fn resolve_static_dir(configured: &str) -> String {
    if std::path::Path::new(configured).exists() {
        return configured.to_string();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join(configured);
            if path.exists() {
                return path.to_string_lossy().to_string();
            }
        }
    }

    configured.to_string()
}
