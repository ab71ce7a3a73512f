//! View models for the checkout page.

use chrono::NaiveDate;
use serde::Serialize;
use shopfront_commerce::cart::Cart;
use shopfront_commerce::catalog::{format_delivery_date, DeliveryOptions, ProductCatalog};
use shopfront_commerce::checkout::{resolve_lines, ResolvedLine};
use shopfront_commerce::ids::{DeliveryOptionId, ProductId};

/// One radio choice under a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryChoiceView {
    pub delivery_option_id: DeliveryOptionId,
    /// e.g. "Tuesday, June 21"
    pub date_label: String,
    /// "FREE" or "$4.99"
    pub price_label: String,
    pub selected: bool,
}

/// A cart line as shown in the review section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub price_label: String,
    pub quantity: i64,
    /// Date for the currently selected option.
    pub delivery_date: String,
    pub choices: Vec<DeliveryChoiceView>,
}

/// Everything the order summary section displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummaryView {
    pub lines: Vec<OrderLineView>,
}

impl OrderSummaryView {
    /// Build the view for `cart` as of `today`. Unresolvable lines are left out.
    pub fn build(
        cart: &Cart,
        catalog: &ProductCatalog,
        delivery_options: &DeliveryOptions,
        today: NaiveDate,
    ) -> Self {
        let lines = resolve_lines(cart, catalog, delivery_options)
            .into_iter()
            .map(|line| OrderLineView::build(&line, delivery_options, today))
            .collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl OrderLineView {
    fn build(line: &ResolvedLine<'_>, delivery_options: &DeliveryOptions, today: NaiveDate) -> Self {
        let choices = delivery_options
            .iter()
            .map(|option| DeliveryChoiceView {
                delivery_option_id: option.id.clone(),
                date_label: format_delivery_date(option.delivery_date(today)),
                price_label: option.price_label(),
                selected: option.id == line.item.delivery_option_id,
            })
            .collect();

        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            price_label: line.product.formatted_price(),
            quantity: line.item.quantity,
            delivery_date: format_delivery_date(line.delivery_option.delivery_date(today)),
            choices,
        }
    }
}

/// Selector of a line's container in the order summary.
pub fn cart_item_selector(product_id: &ProductId) -> String {
    format!(".js-cart-item-container-{}", product_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopfront_commerce::cart::CartItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[test]
    fn test_build_seeded_cart() {
        let catalog = ProductCatalog::bundled().unwrap();
        let view = OrderSummaryView::build(
            &Cart::seeded(),
            &catalog,
            &DeliveryOptions::standard(),
            today(),
        );

        assert_eq!(view.lines.len(), 2);
        let socks = &view.lines[0];
        assert_eq!(socks.name, "Black and Gray Athletic Cotton Socks - 6 Pairs");
        assert_eq!(socks.price_label, "$10.90");
        assert_eq!(socks.quantity, 2);
        assert_eq!(socks.delivery_date, "Friday, June 21");

        let labels: Vec<(&str, &str, bool)> = socks
            .choices
            .iter()
            .map(|c| (c.date_label.as_str(), c.price_label.as_str(), c.selected))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Friday, June 21", "FREE", true),
                ("Monday, June 17", "$4.99", false),
                ("Saturday, June 15", "$9.99", false),
            ]
        );

        assert_eq!(view.lines[1].delivery_date, "Monday, June 17");
    }

    #[test]
    fn test_unresolved_lines_are_skipped() {
        let catalog = ProductCatalog::bundled().unwrap();
        let cart = Cart::from_items(vec![
            CartItem::new("missing-product", 1, "1"),
            CartItem::new("15b6fc6f-327a-4ec4-896f-486349e85a3d", 1, "9"),
            CartItem::new("54e0eccd-8f36-462b-b68a-8182611d9add", 1, "3"),
        ]);

        let view = OrderSummaryView::build(&cart, &catalog, &DeliveryOptions::standard(), today());
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].name, "2 Slot Toaster - Black");
    }

    #[test]
    fn test_cart_item_selector() {
        assert_eq!(
            cart_item_selector(&ProductId::new("abc")),
            ".js-cart-item-container-abc"
        );
    }
}
