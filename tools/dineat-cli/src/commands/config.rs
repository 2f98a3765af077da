//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[storage]");
    ctx.output.kv("path", &ctx.storage.path().display().to_string());
    if let Some(quota) = ctx.config.storage.quota_bytes {
        ctx.output.kv("quota_bytes", &quota.to_string());
    }

    ctx.output.info("[display]");
    ctx.output.kv("currency", ctx.currency.code());

    ctx.output.info("[timing]");
    let timing = &ctx.config.timing;
    ctx.output.kv("login_delay_ms", &timing.login_delay_ms.to_string());
    ctx.output.kv("payment_delay_ms", &timing.payment_delay_ms.to_string());
    ctx.output.kv("redirect_delay_ms", &timing.redirect_delay_ms.to_string());

    ctx.output.info("[menu]");
    if ctx.config.menu.is_empty() {
        ctx.output.kv("source", "house menu");
    } else {
        ctx.output.kv("dishes", &ctx.config.menu.len().to_string());
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("dineat.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
