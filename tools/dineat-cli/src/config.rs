//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use dineat_commerce::menu::{house_menu, MenuItem};
use dineat_commerce::money::Currency;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["dineat.toml", ".dineat.toml", "dineat.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where client state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Simulated delays.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Menu override. The house menu is used when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuItem>,
}

impl CliConfig {
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

    /// The menu to serve.
    pub fn menu(&self) -> Vec<MenuItem> {
        if self.menu.is_empty() {
            house_menu()
        } else {
            self.menu.clone()
        }
    }

    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.display.currency)
            .with_context(|| format!("Unsupported currency: {}", self.display.currency))
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State file, relative to the working directory.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Byte limit on stored keys and values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

fn default_storage_path() -> String {
    ".dineat/state.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            quota_bytes: None,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code for prices and totals.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Simulated delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    1500
}

fn default_payment_delay_ms() -> u64 {
    2000
}

fn default_redirect_delay_ms() -> u64 {
    1000
}

impl TimingConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            payment_delay_ms: default_payment_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

/// Generate a default dineat.toml config file.
pub fn generate_default_config() -> String {
    r#"# DineAt client configuration

[storage]
path = ".dineat/state.json"
# quota_bytes = 5242880

[display]
currency = "INR"

[timing]
login_delay_ms = 1500
payment_delay_ms = 2000
redirect_delay_ms = 1000

# Replace the house menu by listing dishes here.
# [[menu]]
# id = "paneer-tikka"
# name = "Paneer Tikka"
# description = "Soft cottage cheese marinated in spices and grilled"
# price = 180.0
# category = "APPETIZER"
# vegetarian = true
"#
    .to_string()
}
