//! List placed orders.

use anyhow::Result;
use chrono::Local;

use super::OrdersArgs;
use crate::context::Context;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let mut orders = ctx.order_history().orders();

    // Newest first
    orders.reverse();
    if let Some(limit) = args.limit {
        orders.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Orders");
    if orders.is_empty() {
        ctx.output.info("No orders placed yet");
        return Ok(());
    }

    let widths = [36, 20, 6];
    ctx.output.table_row(&["ORDER", "PLACED", "ITEMS"], &widths);
    for order in &orders {
        let placed = order
            .placed_at()
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let items = order.item_count().to_string();
        ctx.output
            .table_row(&[order.id.as_str(), &placed, &items], &widths);
    }

    Ok(())
}
