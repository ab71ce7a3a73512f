//! Review the order and payment summary.

use anyhow::{Context as _, Result};
use checkout_page::{checkout_surface, CheckoutPage, OrderSummaryView};
use serde::Serialize;
use shopfront_commerce::checkout::PaymentSummary;

use super::CheckoutArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CheckoutReport {
    order_summary: OrderSummaryView,
    payment_summary: PaymentSummary,
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let backend = ctx.backend(args.offline)?;
    let mut page = CheckoutPage::new(
        backend,
        ctx.cart_store(),
        ctx.order_history(),
        checkout_surface(),
    );

    let spinner = ctx.output.spinner("Loading checkout...");
    page.load_page().await;
    spinner.finish_and_clear();

    if let Some(path) = &args.html {
        let path = ctx.resolve_path(path);
        std::fs::write(&path, page.document())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    let report = CheckoutReport {
        order_summary: page.order_summary_view(),
        payment_summary: page.payment_summary(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_order_summary(ctx, &report.order_summary);
    print_payment_summary(ctx, &report.payment_summary);
    Ok(())
}

pub(crate) fn print_order_summary(ctx: &Context, view: &OrderSummaryView) {
    ctx.output.header("Review your order");
    if view.is_empty() {
        ctx.output.info("Nothing to review");
        return;
    }

    for line in &view.lines {
        ctx.output.list_item(&format!(
            "{} x{} at {} - delivery {}",
            line.name, line.quantity, line.price_label, line.delivery_date
        ));
        for choice in &line.choices {
            let marker = if choice.selected { "(*)" } else { "( )" };
            ctx.output.kv(
                &format!("    {} option {}", marker, choice.delivery_option_id),
                &format!("{} - {}", choice.date_label, choice.price_label),
            );
        }
    }
}

pub(crate) fn print_payment_summary(ctx: &Context, summary: &PaymentSummary) {
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Items ({})", summary.item_count),
        &summary.products_total.display(),
    );
    ctx.output.kv("Shipping & handling", &summary.shipping_total.display());
    ctx.output.kv("Total before tax", &summary.total_before_tax.display());
    ctx.output.kv("Estimated tax (10%)", &summary.tax.display());
    ctx.output.kv("Order total", &summary.total.display());
}
