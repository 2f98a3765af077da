//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use dineat_auth::SessionManager;
use dineat_commerce::cart::CartStore;
use dineat_commerce::menu::MenuItem;
use dineat_commerce::money::Currency;
use dineat_storage::FileStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Client state.
    pub storage: FileStore,
    pub currency: Currency,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let currency = config.currency()?;
        let storage_path = resolve_path(&cwd, &config.storage.path);
        let mut storage = FileStore::open(storage_path);
        if let Some(quota) = config.storage.quota_bytes {
            storage = storage.with_quota(quota);
        }
        tracing::debug!(path = %storage.path().display(), "using state file");

        Ok(Self {
            config,
            output,
            cwd,
            storage,
            currency,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The configured menu.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.config.menu()
    }

    /// Open the cart, reporting through the output handler.
    pub fn cart(&self) -> CartStore<'_> {
        CartStore::load(&self.storage, &self.output).with_currency(self.currency)
    }

    /// Session operations with the configured delays.
    pub fn session(&self) -> SessionManager<'_> {
        SessionManager::new(&self.storage, &self.output)
            .with_login_delay(self.config.timing.login_delay())
            .with_redirect_delay(self.config.timing.redirect_delay())
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
