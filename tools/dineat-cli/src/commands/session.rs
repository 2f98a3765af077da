//! Login, logout, access checks and table selection.

use anyhow::{Context as _, Result};
use chrono::Local;
use dialoguer::{Input, Password};
use dineat_auth::{AccessDecision, AuthError, LoginForm, Redirect, UserType};

use super::{AccessArgs, LoginArgs, TableArgs};
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let user_type: UserType = args.user_type.parse()?;

    let username = match args.username {
        Some(username) => username,
        None if ctx.output.is_json() => String::new(),
        None => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None if ctx.output.is_json() => String::new(),
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let form = LoginForm::with_credentials(user_type, username, password);
    let session = ctx.session();

    let spinner = ctx.output.spinner("Signing in");
    let result = session.login(&form).await;
    spinner.finish_and_clear();

    let redirect = result.map_err(|e| match e {
        AuthError::Storage(_) => anyhow::Error::new(e).context("Login failed. Please try again."),
        other => other.into(),
    })?;
    print_redirect(ctx, &redirect);
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let redirect = ctx.session().logout().context("Error logging out")?;
    print_redirect(ctx, &redirect);
    Ok(())
}

/// Show who is logged in.
pub async fn whoami(ctx: &Context) -> Result<()> {
    let user = ctx.session().current_user()?;

    if ctx.output.is_json() {
        ctx.output.json(&user);
        return Ok(());
    }

    let Some(user) = user else {
        ctx.output.info("Not logged in");
        return Ok(());
    };

    ctx.output.header("Session");
    ctx.output.kv(
        "user type",
        user.user_type.map_or("unknown", |t| t.display_name()),
    );
    if let Some(login_time) = user.login_time {
        ctx.output.kv(
            "logged in",
            &login_time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        );
    }
    match user.table {
        Some(table) => ctx.output.kv("table", &table.to_string()),
        None => ctx.output.kv("table", "none"),
    }
    Ok(())
}

/// Run the access command.
pub async fn access(args: AccessArgs, ctx: &Context) -> Result<()> {
    let decision = ctx.session().check_access(&args.page);

    if ctx.output.is_json() {
        ctx.output.json(&decision);
        return Ok(());
    }

    match decision {
        AccessDecision::Allowed => ctx.output.success(&format!("{} is accessible", args.page)),
        AccessDecision::Redirect(redirect) => ctx.output.warn(&format!(
            "{} is not available to this user, redirecting to {}",
            args.page, redirect.page
        )),
    }
    Ok(())
}

/// Run the table command.
pub async fn table(args: TableArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session();

    let Some(number) = args.number else {
        let table = session.selected_table()?;
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "table": table }));
        } else {
            match table {
                Some(table) => ctx.output.kv("table", &table.to_string()),
                None => ctx.output.info("No table selected"),
            }
        }
        return Ok(());
    };

    let redirect = session.select_table(number).context("Error selecting table")?;
    print_redirect(ctx, &redirect);
    Ok(())
}

fn print_redirect(ctx: &Context, redirect: &Redirect) {
    if ctx.output.is_json() {
        ctx.output.json(redirect);
    } else {
        ctx.output.debug(&format!("next page: {}", redirect.page));
    }
}
