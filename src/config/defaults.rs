//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default hazard API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

/// Default path for the file-backed hazard store
pub const DEFAULT_STORE_FILE: &str = "hazards.json";

/// Default directory served at `/`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "trail-watch";
