//! List the product catalog.

use anyhow::{Context as _, Result};
use catalog_page::{catalog_surface, CatalogPage, CatalogView};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let backend = ctx.backend(args.offline)?;
    let mut page = CatalogPage::new(backend, ctx.cart_store(), catalog_surface());

    let spinner = ctx.output.spinner("Loading products...");
    page.load_page().await;
    spinner.finish_and_clear();

    let view = CatalogView::filtered(page.catalog(), args.search.as_deref());

    if let Some(path) = &args.html {
        let path = ctx.resolve_path(path);
        std::fs::write(&path, page.document())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("Products");
    if view.is_empty() {
        ctx.output.warn("No products found");
        return Ok(());
    }

    let widths = [36, 40, 8, 12];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "RATING"], &widths);
    for card in &view.cards {
        let rating = format!("{} reviews", card.rating_count);
        let name = truncate(&card.name, 40);
        ctx.output.table_row(
            &[card.product_id.as_str(), &name, &card.price_label, &rating],
            &widths,
        );
        for link in &card.extra_links {
            ctx.output.kv(&link.label, &link.href);
        }
    }

    ctx.output.info(&format!("Cart: {} items", page.store().quantity()));
    Ok(())
}
