//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shopfront_cache::FileStore;
use shopfront_commerce::cart::{CartStore, KvCartStorage};
use shopfront_commerce::checkout::OrderHistory;
use shopfront_data::{Backend, HttpBackend, StaticBackend};

use crate::config::ShopConfig;
use crate::output::Output;

/// Storage shared by the cart and the order history.
pub type SharedStore = Arc<FileStore>;

/// Cart store over the local storage file.
pub type LocalCartStore = CartStore<KvCartStorage<SharedStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    store: SharedStore,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            ShopConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let storage_path = resolve_path(&cwd, &config.storage.path);
        output.debug(&format!("Using storage file {}", storage_path.display()));
        let store = Arc::new(FileStore::new(storage_path));

        Ok(Self {
            config,
            output,
            cwd,
            store,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<ShopConfig> {
        let config_names = ["shop.toml", ".shop.toml", "shop.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The backend to talk to. Offline mode serves the bundled catalog.
    pub fn backend(&self, offline: bool) -> Result<Box<dyn Backend>> {
        if offline {
            self.output.debug("Offline: using bundled catalog");
            let backend = StaticBackend::bundled().context("Failed to load bundled catalog")?;
            return Ok(Box::new(backend));
        }
        let endpoints = self.config.backend.endpoints();
        self.output.debug(&format!("Backend: {}", endpoints.base_url));
        Ok(Box::new(HttpBackend::new(endpoints)))
    }

    /// The cart as currently stored.
    pub fn cart_store(&self) -> LocalCartStore {
        CartStore::load(KvCartStorage::new(Arc::clone(&self.store)))
    }

    pub fn order_history(&self) -> OrderHistory<SharedStore> {
        OrderHistory::new(Arc::clone(&self.store))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
