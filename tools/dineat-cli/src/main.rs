//! DineAt CLI - restaurant ordering from the terminal.
//!
//! Commands:
//! - `dineat menu` - Browse the menu, optionally by category
//! - `dineat cart` - Show and change the cart
//! - `dineat login` / `logout` / `whoami` - Simulated sign-in
//! - `dineat access` - Check whether a page is open to the current user
//! - `dineat table` - Choose a table
//! - `dineat lang` - Switch between English and Tamil
//! - `dineat pay` - Simulated payment
//! - `dineat rate` / `ratings` - Rate dishes
//! - `dineat order-status` - Update an order on the kitchen dashboard
//! - `dineat config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AccessArgs, CartArgs, ConfigArgs, LangArgs, LoginArgs, MenuArgs, OrderStatusArgs, PayArgs,
    RateArgs, TableArgs,
};

/// DineAt CLI - order from the restaurant menu
#[derive(Parser)]
#[command(name = "dineat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu(MenuArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Log in as a customer, kitchen staff or admin
    Login(LoginArgs),

    /// Log out and forget the table
    Logout,

    /// Show the current session
    Whoami,

    /// Check whether a page is open to the current user
    Access(AccessArgs),

    /// Select a table
    Table(TableArgs),

    /// Show or switch the interface language
    Lang(LangArgs),

    /// Pay for the cart
    Pay(PayArgs),

    /// Rate a dish
    Rate(RateArgs),

    /// List dish ratings
    Ratings,

    /// Update an order's status
    OrderStatus(OrderStatusArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Login(args) => commands::session::login(args, &ctx).await,
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Whoami => commands::session::whoami(&ctx).await,
        Commands::Access(args) => commands::session::access(args, &ctx).await,
        Commands::Table(args) => commands::session::table(args, &ctx).await,
        Commands::Lang(args) => commands::prefs::run(args, &ctx).await,
        Commands::Pay(args) => commands::checkout::pay(args, &ctx).await,
        Commands::Rate(args) => commands::rating::rate(args, &ctx).await,
        Commands::Ratings => commands::rating::list(&ctx).await,
        Commands::OrderStatus(args) => commands::checkout::order_status(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
