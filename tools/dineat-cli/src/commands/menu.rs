//! Browse the menu.

use anyhow::Result;
use dineat_commerce::menu::{categories, filter_menu, CategoryFilter};
use dineat_commerce::money::Money;

use super::MenuArgs;
use crate::context::Context;
use crate::output::veg_marker;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let filter: CategoryFilter = args.category.parse()?;
    let menu = ctx.menu();
    let view = filter_menu(&menu, filter);

    let visible: Vec<_> = menu
        .iter()
        .zip(&view.entries)
        .filter(|(_, entry)| entry.visible)
        .map(|(item, _)| item)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "filter": view.active.to_string(),
            "items": visible,
        }));
        return Ok(());
    }

    let names: Vec<&str> = categories(&menu).iter().map(|c| c.code()).collect();
    ctx.output.header(&format!("Menu ({})", view.active));
    ctx.output.kv("categories", &format!("all, {}", names.join(", ")));

    if visible.is_empty() {
        ctx.output.info("No dishes in this category");
        return Ok(());
    }

    for category in categories(&menu) {
        let dishes: Vec<_> = visible.iter().filter(|i| i.category == category).collect();
        if dishes.is_empty() {
            continue;
        }
        ctx.output.info(category.display_name());
        for item in dishes {
            let price = Money::from_decimal(item.price, ctx.currency).display();
            ctx.output.table_row(
                &[item.id.as_str(), &item.name, &price, &veg_marker(item.vegetarian)],
                &[20, 22, 10, 8],
            );
        }
    }

    Ok(())
}
