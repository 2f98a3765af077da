//! Dish ratings.

use anyhow::{bail, Result};
use dineat_commerce::rating::RatingBook;

use super::RateArgs;
use crate::context::Context;

/// Run the rate command.
pub async fn rate(args: RateArgs, ctx: &Context) -> Result<()> {
    if !ctx.menu().iter().any(|i| i.id == *args.dish.as_str()) {
        bail!("Unknown dish: {}", args.dish);
    }

    let book = RatingBook::new(&ctx.storage, &ctx.output);
    let record = book.submit(&args.dish, args.stars, args.review.as_deref().unwrap_or(""))?;

    if ctx.output.is_json() {
        ctx.output.json(&record);
    } else {
        ctx.output.kv(&args.dish, &record.rating.to_string());
    }
    Ok(())
}

/// List stored ratings.
pub async fn list(ctx: &Context) -> Result<()> {
    let ratings = RatingBook::new(&ctx.storage, &ctx.output).all();

    if ctx.output.is_json() {
        ctx.output.json(&ratings);
        return Ok(());
    }

    ctx.output.header("Ratings");
    if ratings.is_empty() {
        ctx.output.info("No ratings yet");
        return Ok(());
    }
    for (dish, record) in &ratings {
        let stars = record.rating.to_string();
        ctx.output
            .table_row(&[dish.as_str(), &stars, &record.review], &[20, 5, 40]);
    }
    Ok(())
}
