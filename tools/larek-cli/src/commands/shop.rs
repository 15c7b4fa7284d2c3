//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use larek_client::{CheckoutError, Storefront};
use larek_commerce::checkout::FieldState;
use larek_commerce::view::{ADD_LABEL, REMOVE_LABEL};
use larek_commerce::PaymentMethod;

use crate::context::Context;
use crate::output::category_badge;

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("`larek shop` is interactive and has no JSON output");
    }

    let mut shop = ctx.storefront()?;
    let spinner = ctx.output.spinner("Fetching catalog...");
    shop.load_catalog().await;
    spinner.finish_and_clear();
    if shop.catalog().is_empty() {
        bail!("The catalog is empty or the shop is unreachable");
    }

    let counter = shop.basket_counter();
    let basket_list = shop.basket_list();

    loop {
        let menu = [
            "Browse catalog".to_string(),
            format!(
                "Basket ({}, {})",
                counter.label(),
                basket_list.total_label()
            ),
            "Quit".to_string(),
        ];
        let choice = Select::new()
            .with_prompt("Веб-ларёк")
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&mut shop, ctx)?,
            1 => basket(&mut shop, ctx).await?,
            _ => break,
        }
    }

    Ok(())
}

fn browse(shop: &mut Storefront, ctx: &Context) -> Result<()> {
    let cards = shop.cards();
    let mut items: Vec<String> = cards
        .iter()
        .map(|card| {
            let marker = if shop.basket().contains(&card.product().id) {
                " *"
            } else {
                ""
            };
            format!("{} · {}{}", card.title(), card.price_label(), marker)
        })
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Pick a product")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(card) = cards.get(choice) else {
        return Ok(());
    };

    let preview = shop.preview(&card.product().id)?;
    ctx.output.header(card.title());
    ctx.output
        .kv("category", &category_badge(card.category_kind(), card.category()));
    ctx.output.kv("price", &card.price_label());
    ctx.output.kv("image", &card.image_url());
    if !preview.description().is_empty() {
        ctx.output.info(preview.description());
    }

    if !preview.action_enabled() {
        ctx.output.warn("This product is not for sale");
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(preview.action_label())
        .default(preview.action_label() == ADD_LABEL)
        .interact()?;
    if confirmed {
        shop.toggle_product(&card.product().id)?;
        if preview.action_label() == REMOVE_LABEL {
            ctx.output.success(&format!("{} is in the basket", card.title()));
        } else {
            ctx.output.success(&format!("{} removed from the basket", card.title()));
        }
    }

    Ok(())
}

async fn basket(shop: &mut Storefront, ctx: &Context) -> Result<()> {
    shop.open_basket()?;
    let list = shop.basket_list();

    ctx.output.header("Корзина");
    let lines = list.lines();
    if lines.is_empty() {
        ctx.output.info("The basket is empty");
    }
    for line in &lines {
        ctx.output
            .list_item(&format!("{}. {}  {}", line.index, line.title, line.price_label));
    }
    ctx.output.kv("total", &list.total_label());

    if !list.order_button_enabled() {
        shop.close()?;
        return Ok(());
    }

    let mut options = vec!["Оформить".to_string()];
    options.extend(lines.iter().map(|line| format!("Remove {}", line.title)));
    options.push("Back".to_string());

    let choice = Select::new().items(&options).default(0).interact()?;
    if choice == 0 {
        shop.place_order()?;
        return checkout(shop, ctx).await;
    }
    if let Some(line) = lines.get(choice - 1) {
        shop.remove_from_basket(&line.id);
    }
    shop.close()?;
    Ok(())
}

async fn checkout(shop: &mut Storefront, ctx: &Context) -> Result<()> {
    let methods = [PaymentMethod::Online, PaymentMethod::OnDelivery];
    let names: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
    let choice = Select::new()
        .with_prompt("Способ оплаты")
        .items(&names)
        .default(0)
        .interact()?;
    shop.select_payment(methods[choice])?;

    loop {
        let value = prompt("Адрес доставки", shop.checkout().payment().address())?;
        shop.enter_address(value)?;
        if report(ctx, shop.checkout().payment().address()) {
            break;
        }
    }
    shop.continue_to_contacts()?;

    loop {
        loop {
            let value = prompt("Email", shop.checkout().contacts().email())?;
            shop.enter_email(value)?;
            if report(ctx, shop.checkout().contacts().email()) {
                break;
            }
        }
        loop {
            let value = prompt("Телефон", shop.checkout().contacts().phone())?;
            shop.enter_phone(value)?;
            if report(ctx, shop.checkout().contacts().phone()) {
                break;
            }
        }

        let spinner = ctx.output.spinner("Submitting order...");
        let result = shop.submit_order().await;
        spinner.finish_and_clear();

        match result {
            Ok(success) => {
                ctx.output.success(&success.message());
                shop.dismiss_success()?;
                return Ok(());
            }
            Err(CheckoutError::Submission(e)) => {
                ctx.output.error(&format!("Order was not accepted: {e}"));
                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    shop.close()?;
                    return Ok(());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt(label: &str, field: &FieldState) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(field.value())
        .allow_empty(true)
        .interact_text()?)
}

/// Print the field's inline message. Returns whether the field is valid.
fn report(ctx: &Context, field: &FieldState) -> bool {
    if let Some(message) = field.error() {
        ctx.output.field_error(message);
    }
    field.is_valid()
}
