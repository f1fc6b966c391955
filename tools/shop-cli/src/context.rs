//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_api::ShopApi;
use shop_cache::FileStore;
use shop_commerce::CartStore;
use shop_data::{ApiClient, FetchClient};

use crate::config::{CliConfig, BASE_URL_ENV, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        let config = config.with_base_url_override(std::env::var(BASE_URL_ENV).ok());

        tracing::debug!(
            config = ?config_path,
            base_url = %config.api.base_url,
            "Loaded configuration"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Client for the REST service. Failures are printed as they happen.
    pub fn api(&self) -> ShopApi {
        let fetch = FetchClient::new()
            .with_base_url(self.config.api.base_url.clone())
            .with_default_header("Accept", "application/json")
            .with_timeout(self.config.api.timeout());
        ShopApi::new(ApiClient::new(fetch).with_notifier(self.output.notifier()))
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let dir = self.config.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
        Ok(CartStore::open(store))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(&config_path) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "Skipping unreadable config"),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
