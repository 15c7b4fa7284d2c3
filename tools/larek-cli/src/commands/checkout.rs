//! Non-interactive checkout.

use anyhow::{bail, Context as _, Result};
use larek_commerce::ProductId;
use serde_json::json;

use super::{ensure_valid, CheckoutArgs};
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    let spinner = ctx.output.spinner("Fetching catalog...");
    shop.load_catalog().await;
    spinner.finish_and_clear();
    if shop.catalog().is_empty() {
        bail!("The catalog is empty or the shop is unreachable");
    }

    for item in &args.items {
        let id = ProductId::new(item.as_str());
        if shop.basket().contains(&id) {
            ctx.output.warn(&format!("{} listed more than once, buying it once", id));
            continue;
        }
        shop.toggle_product(&id)
            .with_context(|| format!("Cannot add {} to the basket", id))?;
        ctx.output.debug(&format!("Added {}", id));
    }

    shop.open_basket()?;
    shop.place_order()?;

    shop.select_payment(args.payment)?;
    shop.enter_address(args.address.as_str())?;
    ensure_valid(shop.checkout().payment().address())?;
    shop.continue_to_contacts()?;

    shop.enter_email(args.email.as_str())?;
    shop.enter_phone(args.phone.as_str())?;
    ensure_valid(shop.checkout().contacts().email())?;
    ensure_valid(shop.checkout().contacts().phone())?;

    let total = shop.basket().total();
    let spinner = ctx.output.spinner(&format!("Submitting order for {}...", total.display()));
    let result = shop.submit_order().await;
    spinner.finish_and_clear();
    let success = result.context("Order was not accepted")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "charged": total, "message": success.message() }));
    } else {
        ctx.output.success(&success.message());
    }

    Ok(())
}
