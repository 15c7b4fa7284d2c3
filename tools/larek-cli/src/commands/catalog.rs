//! List the products on sale.

use anyhow::Result;
use serde_json::json;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::category_badge;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    let spinner = ctx.output.spinner("Fetching catalog...");
    shop.load_catalog().await;
    spinner.finish_and_clear();

    let cards = shop.cards();

    if ctx.output.is_json() {
        let items: Vec<_> = cards
            .iter()
            .map(|card| {
                let product = card.product();
                json!({
                    "id": product.id,
                    "title": product.title,
                    "category": product.category,
                    "price": product.price,
                    "price_label": card.price_label(),
                    "image_url": card.image_url(),
                })
            })
            .collect();
        ctx.output.json(&json!({ "total": shop.catalog().total, "items": items }));
        return Ok(());
    }

    if cards.is_empty() {
        ctx.output.warn("The catalog is empty or the shop is unreachable");
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", cards.len()));
    let widths = [36, 32, 14];
    ctx.output.table_row(&["ID", "TITLE", "PRICE"], &widths);
    for card in &cards {
        let id = card.product().id.to_string();
        let price = card.price_label();
        ctx.output.table_row(&[&id, card.title(), &price], &widths);
        ctx.output
            .kv("category", &category_badge(card.category_kind(), card.category()));
        if args.images {
            ctx.output.kv("image", &card.image_url());
        }
    }

    Ok(())
}
