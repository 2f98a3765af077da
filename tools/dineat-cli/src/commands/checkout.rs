//! Payment and order status commands.

use anyhow::Result;
use dineat_commerce::checkout::{update_order_status, Checkout, PaymentMethod};

use super::{OrderStatusArgs, PayArgs};
use crate::context::Context;
use crate::output::status_badge;

/// Run the pay command.
pub async fn pay(args: PayArgs, ctx: &Context) -> Result<()> {
    let method = args
        .method
        .as_deref()
        .map(str::parse::<PaymentMethod>)
        .transpose()?;

    let mut cart = ctx.cart();
    let checkout = Checkout::new(&ctx.storage, &ctx.output)
        .with_processing_delay(ctx.config.timing.payment_delay());

    let spinner = ctx.output.spinner("Contacting payment gateway");
    let result = checkout.process_payment(&mut cart, method).await;
    spinner.finish_and_clear();
    let receipt = result?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.header("Order confirmed");
    ctx.output.kv("method", receipt.method.display_name());
    ctx.output.kv("total", &receipt.total.display());
    ctx.output.kv("date", &receipt.order_date.to_rfc3339());
    ctx.output.debug(&format!("next page: {}", receipt.redirect_to));
    Ok(())
}

/// Run the order-status command.
pub async fn order_status(args: OrderStatusArgs, ctx: &Context) -> Result<()> {
    let badge = update_order_status(&ctx.output, &args.order_id, &args.status)?;

    if ctx.output.is_json() {
        ctx.output.json(&badge);
    } else {
        ctx.output.kv(&format!("#{}", badge.order_id), &status_badge(badge.status));
    }
    Ok(())
}
