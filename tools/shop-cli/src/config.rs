//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_data::Endpoints;
use shopfront_observability::LogConfig;

/// Default location of the local storage file, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = ".shopfront/storage.json";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Backend location.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Local storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LogConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Backend host and endpoint paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_products_path")]
    pub products_path: String,

    #[serde(default = "default_cart_path")]
    pub cart_path: String,

    #[serde(default = "default_orders_path")]
    pub orders_path: String,
}

fn default_base_url() -> String {
    Endpoints::default().base_url
}

fn default_products_path() -> String {
    Endpoints::default().products_path
}

fn default_cart_path() -> String {
    Endpoints::default().cart_path
}

fn default_orders_path() -> String {
    Endpoints::default().orders_path
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
            cart_path: default_cart_path(),
            orders_path: default_orders_path(),
        }
    }
}

impl BackendConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            base_url: self.base_url.clone(),
            products_path: self.products_path.clone(),
            cart_path: self.cart_path.clone(),
            orders_path: self.orders_path.clone(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the cart and order history.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}
