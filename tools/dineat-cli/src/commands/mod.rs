//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod menu;
pub mod prefs;
pub mod rating;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Category code (e.g. MAIN_COURSE) or "all".
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show {
        /// Print the cart list as HTML.
        #[arg(long)]
        html: bool,
    },
    /// Add one of a menu item.
    Add {
        /// Menu item id.
        item: String,
    },
    /// Remove an item entirely.
    Remove {
        /// Menu item id.
        item: String,
    },
    /// Set an item's quantity. Zero or less removes it.
    Set {
        /// Menu item id.
        item: String,
        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        quantity: f64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// customer, kitchen or admin.
    pub user_type: String,

    /// Username (prompted for if omitted).
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted for if omitted).
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the access command.
#[derive(Args)]
pub struct AccessArgs {
    /// Page name or path, e.g. kitchen-dashboard.html.
    pub page: String,
}

/// Arguments for the table command.
#[derive(Args)]
pub struct TableArgs {
    /// Table number. Shows the current table if omitted.
    pub number: Option<u32>,
}

/// Arguments for the lang command.
#[derive(Args)]
pub struct LangArgs {
    /// en or ta. Shows the current language if omitted.
    pub code: Option<String>,
}

/// Arguments for the pay command.
#[derive(Args)]
pub struct PayArgs {
    /// cod, card, upi or wallet.
    pub method: Option<String>,
}

/// Arguments for the rate command.
#[derive(Args)]
pub struct RateArgs {
    /// Dish id.
    pub dish: String,

    /// Stars from 1 to 5.
    pub stars: Option<u8>,

    /// Review text.
    pub review: Option<String>,
}

/// Arguments for the order-status command.
#[derive(Args)]
pub struct OrderStatusArgs {
    /// Order id.
    pub order_id: String,

    /// pending, preparing, ready, delivered or cancelled.
    pub status: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
