//! Show and edit the cart.

use anyhow::{bail, Result};
use catalog_page::{catalog_surface, CatalogPage};
use dialoguer::Confirm;
use shopfront_commerce::catalog::{DeliveryOptions, ProductCatalog};
use shopfront_commerce::ids::{DeliveryOptionId, ProductId};

use super::{CartArgs, CartCommand};
use crate::context::{Context, LocalCartStore};

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx),
        CartCommand::Add {
            product_id,
            quantity,
        } => add(ctx, ProductId::new(product_id), &quantity),
        CartCommand::Remove { product_id } => remove(ctx, ProductId::new(product_id)),
        CartCommand::Delivery {
            product_id,
            delivery_option_id,
        } => delivery(
            ctx,
            ProductId::new(product_id),
            DeliveryOptionId::new(delivery_option_id),
        ),
        CartCommand::Reset { yes } => reset(ctx, yes),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.cart_store();

    if ctx.output.is_json() {
        ctx.output.json(store.cart());
        return Ok(());
    }

    print_cart(ctx, &store);
    Ok(())
}

fn add(ctx: &Context, product_id: ProductId, quantity: &str) -> Result<()> {
    if let Ok(catalog) = ProductCatalog::bundled() {
        if catalog.get(&product_id).is_none() {
            ctx.output
                .warn(&format!("{} is not in the bundled catalog", product_id));
        }
    }

    if quantity.trim().parse::<i64>().is_err() {
        bail!("Invalid quantity '{}'", quantity);
    }

    let mut page = CatalogPage::new(ctx.backend(true)?, ctx.cart_store(), catalog_surface());
    page.on_add_to_cart(&product_id, quantity);

    ctx.output.success(&format!("Added {} x{}", product_id, quantity.trim()));
    print_cart(ctx, page.store());
    Ok(())
}

fn remove(ctx: &Context, product_id: ProductId) -> Result<()> {
    let mut store = ctx.cart_store();
    if store.remove(&product_id) {
        ctx.output.success(&format!("Removed {}", product_id));
    } else {
        ctx.output.warn(&format!("{} was not in the cart", product_id));
    }
    print_cart(ctx, &store);
    Ok(())
}

fn delivery(ctx: &Context, product_id: ProductId, delivery_option_id: DeliveryOptionId) -> Result<()> {
    let options = DeliveryOptions::standard();
    if options.get(&delivery_option_id).is_none() {
        let known: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        bail!(
            "Unknown delivery option '{}' (expected one of {})",
            delivery_option_id,
            known.join(", ")
        );
    }

    let mut store = ctx.cart_store();
    if store.set_delivery_option(&product_id, &delivery_option_id) {
        ctx.output.success(&format!(
            "Delivery option {} selected for {}",
            delivery_option_id, product_id
        ));
    } else {
        ctx.output.warn(&format!("{} is not in the cart", product_id));
    }
    print_cart(ctx, &store);
    Ok(())
}

fn reset(ctx: &Context, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Replace the cart with the default cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Reset cancelled");
            return Ok(());
        }
    }

    let mut store = ctx.cart_store();
    store.reset();
    ctx.output.success("Cart reset");
    print_cart(ctx, &store);
    Ok(())
}

fn print_cart(ctx: &Context, store: &LocalCartStore) {
    ctx.output.header("Cart");
    if store.cart().is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }

    let widths = [36, 8, 8];
    ctx.output.table_row(&["PRODUCT", "QTY", "DELIVERY"], &widths);
    for item in store.items() {
        let quantity = item.quantity.to_string();
        ctx.output.table_row(
            &[
                item.product_id.as_str(),
                &quantity,
                item.delivery_option_id.as_str(),
            ],
            &widths,
        );
    }
    ctx.output.kv("Items", &store.quantity().to_string());
}
