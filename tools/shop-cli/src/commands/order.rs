//! Place an order.

use anyhow::{bail, Context as _, Result};
use checkout_page::{checkout_surface, CheckoutPage};
use dialoguer::Confirm;

use super::checkout::print_payment_summary;
use super::{OrderArgs, OrderCommand};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        OrderCommand::Place { offline, yes } => place(ctx, offline, yes).await,
    }
}

async fn place(ctx: &Context, offline: bool, yes: bool) -> Result<()> {
    let backend = ctx.backend(offline)?;
    let mut page = CheckoutPage::new(
        backend,
        ctx.cart_store(),
        ctx.order_history(),
        checkout_surface(),
    );

    let spinner = ctx.output.spinner("Loading checkout...");
    page.load_page().await;
    spinner.finish_and_clear();

    let summary = page.payment_summary();
    if page.store().cart().is_empty() {
        bail!("Cart is empty. Nothing to order.");
    }

    if !ctx.output.is_json() {
        print_payment_summary(ctx, &summary);
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let result = page.place_order().await;
    spinner.finish_and_clear();
    let order = result.context("Failed to place order")?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(&format!("Order {} placed", order.id));
    ctx.output.kv("Items", &order.item_count().to_string());
    if let Some(placed_at) = order.placed_at() {
        ctx.output.kv("Placed at", &placed_at.to_rfc2822());
    }
    if let Some(location) = page.surface().location() {
        ctx.output.debug(&format!("Navigated to {}", location));
    }
    Ok(())
}
