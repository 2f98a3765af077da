//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use dineat_commerce::cart::{AddOutcome, CartView, NewCartItem, QuantityUpdate};
use dineat_commerce::error::CartError;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show { html: false }) {
        CartCommand::Show { html } => show(ctx, html),
        CartCommand::Add { item } => add(ctx, &item),
        CartCommand::Remove { item } => remove(ctx, &item),
        CartCommand::Set { item, quantity } => set_quantity(ctx, &item, quantity),
        CartCommand::Clear { yes } => clear(ctx, yes),
    }
}

fn show(ctx: &Context, html: bool) -> Result<()> {
    let cart = ctx.cart();
    let view = cart.view();

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }
    if html {
        println!("{}", view.render_html());
        return Ok(());
    }

    print_view(ctx, &view);
    Ok(())
}

fn add(ctx: &Context, item_id: &str) -> Result<()> {
    let menu = ctx.menu();
    let Some(item) = menu.iter().find(|i| i.id == *item_id) else {
        bail!("Unknown menu item: {}", item_id);
    };

    let renderer = |view: &CartView| ctx.output.debug(&format!("cart badge: {}", view.count));
    let mut cart = ctx.cart().with_renderer(&renderer);

    let outcome = cart.add_item(&NewCartItem::from(item)).map_err(user_facing)?;
    if let AddOutcome::Incremented { quantity } = outcome {
        ctx.output.debug(&format!("{} now x{}", item.name, quantity));
    }

    finish(ctx, &cart.view())
}

fn remove(ctx: &Context, item_id: &str) -> Result<()> {
    let mut cart = ctx.cart();
    if cart.remove_item(item_id).is_none() {
        ctx.output.warn(&format!("{} is not in the cart", item_id));
    }
    finish(ctx, &cart.view())
}

fn set_quantity(ctx: &Context, item_id: &str, quantity: f64) -> Result<()> {
    let mut cart = ctx.cart();
    match cart.update_quantity(item_id, quantity).map_err(user_facing)? {
        QuantityUpdate::Updated { quantity } => {
            ctx.output.success(&format!("{} quantity set to {}", item_id, quantity));
        }
        QuantityUpdate::Removed(None) => {
            ctx.output.warn(&format!("{} is not in the cart", item_id));
        }
        QuantityUpdate::Removed(Some(_)) => {}
    }
    finish(ctx, &cart.view())
}

fn clear(ctx: &Context, yes: bool) -> Result<()> {
    let mut cart = ctx.cart();
    if cart.is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", cart.item_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    cart.clear();
    finish(ctx, &cart.view())
}

/// Print the cart after a change, or its JSON.
fn finish(ctx: &Context, view: &CartView) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(view);
    } else {
        ctx.output.kv("items", &view.count.to_string());
        let (key, value) = total_row(view);
        ctx.output.kv(key, &value);
    }
    Ok(())
}

fn print_view(ctx: &Context, view: &CartView) {
    ctx.output.header(&format!("Cart ({} items)", view.count));
    if view.is_empty() {
        ctx.output.info(dineat_commerce::cart::EMPTY_CART_MESSAGE);
        return;
    }
    for line in &view.lines {
        ctx.output.table_row(
            &[
                line.id.as_str(),
                &line.name,
                &format!("x{}", line.quantity),
                &line.unit_price.display(),
                &line.subtotal.display(),
            ],
            &[20, 22, 5, 10, 10],
        );
    }
    println!();
    let (key, value) = total_row(view);
    ctx.output.kv(key, &value);
}

/// Key and bare amount for the total row.
fn total_row(view: &CartView) -> (&'static str, String) {
    ("total", view.total.display())
}

fn user_facing(e: CartError) -> anyhow::Error {
    let message = e.user_message();
    anyhow::Error::new(e).context(message)
}
