//! Products grid section - one card per product.

use shopfront_dom::{html_escape, Fragment};

use crate::view::{quantity_selector_class, CatalogView, ProductCardView, MAX_SELECTABLE_QUANTITY};

/// Render the products grid.
pub fn render_products_grid(view: &CatalogView) -> Fragment {
    let cards: String = view.cards.iter().map(render_product_card).collect();
    Fragment::markup(cards)
}

fn render_product_card(card: &ProductCardView) -> String {
    let id = html_escape(card.product_id.as_str());

    format!(
        r#"<div class="product-container">
    <div class="product-image-container">
        <img class="product-image" src="{image}">
    </div>
    <div class="product-name limit-text-to-2-lines">{name}</div>
    <div class="product-rating-container">
        <img class="product-rating-stars" src="{stars}">
        <div class="product-rating-count link-primary">{count}</div>
    </div>
    <div class="product-price">{price}</div>
    <div class="product-quantity-container">
        <select class="{selector}">{options}</select>
    </div>
    {extra}
    <div class="product-spacer"></div>
    <div class="added-to-cart">
        <img src="images/icons/checkmark.png">
        Added
    </div>
    <button class="add-to-cart-button button-primary js-add-to-cart" data-product-id="{id}">Add to Cart</button>
</div>"#,
        image = html_escape(&card.image),
        name = html_escape(&card.name),
        stars = html_escape(&card.stars_url),
        count = card.rating_count,
        price = html_escape(&card.price_label),
        selector = html_escape(&quantity_selector_class(&card.product_id)),
        options = render_quantity_options(),
        extra = render_extra_links(card),
        id = id,
    )
}

fn render_quantity_options() -> String {
    (1..=MAX_SELECTABLE_QUANTITY)
        .map(|n| {
            let selected = if n == 1 { " selected" } else { "" };
            format!(r#"<option{selected} value="{n}">{n}</option>"#)
        })
        .collect()
}

fn render_extra_links(card: &ProductCardView) -> String {
    card.extra_links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                html_escape(&link.href),
                html_escape(&link.label)
            )
        })
        .collect()
}
