//! Configuration model loaded from external sources.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub display: DisplaySettings,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Display toggles for the storefront, snapshotted per request before
/// rendering.
pub struct DisplaySettings {
    pub store_name: String,
    pub show_brand_filter: bool,
    pub show_type_filter: bool,
    pub show_prices: bool,
}
