//! Payment summary calculations.

use crate::cart::Cart;
use crate::catalog::{DeliveryOptions, ProductCatalog};
use crate::checkout::resolve_lines;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to products plus delivery.
pub const TAX_RATE_PERCENT: f64 = 10.0;

/// Complete pricing breakdown for the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Sum of quantities over resolvable lines.
    pub item_count: i64,
    /// Sum of price times quantity.
    pub products_total: Money,
    /// Sum of each line's delivery price.
    ///
    /// Charged per cart line, not per shipment.
    pub shipping_total: Money,
    /// Products plus shipping.
    pub total_before_tax: Money,
    /// Tax, rounded to the nearest cent.
    pub tax: Money,
    /// Final total.
    pub total: Money,
}

impl PaymentSummary {
    /// Aggregate the cart. Lines that do not resolve are left out.
    pub fn compute(
        cart: &Cart,
        catalog: &ProductCatalog,
        delivery_options: &DeliveryOptions,
    ) -> Self {
        let lines = resolve_lines(cart, catalog, delivery_options);

        let item_count = lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.item.quantity));
        let products_total: Money = lines.iter().map(|l| l.subtotal()).sum();
        let shipping_total: Money = lines.iter().map(|l| l.delivery_option.price()).sum();

        let total_before_tax = products_total + shipping_total;
        let tax = total_before_tax.percentage(TAX_RATE_PERCENT);

        Self {
            item_count,
            products_total,
            shipping_total,
            total_before_tax,
            tax,
            total: total_before_tax + tax,
        }
    }

    /// Check if the summary covers no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::catalog::{DeliveryOption, Product, ProductKind, Rating};
    use crate::ids::ProductId;
    use pretty_assertions::assert_eq;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![Product {
            id: ProductId::new("p1"),
            image: "p1.jpg".to_string(),
            name: "P1".to_string(),
            rating: Rating {
                stars: 4.0,
                count: 1,
            },
            price_cents: 1000,
            keywords: Vec::new(),
            kind: ProductKind::Standard,
        }])
    }

    fn options() -> DeliveryOptions {
        DeliveryOptions::new(vec![DeliveryOption::new("d1", 3, 500)])
    }

    #[test]
    fn test_single_line_summary() {
        let cart = Cart::from_items(vec![CartItem::new("p1", 2, "d1")]);
        let summary = PaymentSummary::compute(&cart, &catalog(), &options());

        assert_eq!(
            summary,
            PaymentSummary {
                item_count: 2,
                products_total: Money::new(2000),
                shipping_total: Money::new(500),
                total_before_tax: Money::new(2500),
                tax: Money::new(250),
                total: Money::new(2750),
            }
        );
        assert_eq!(summary.tax.display_amount(), "2.50");
        assert_eq!(summary.total.display_amount(), "27.50");
    }

    #[test]
    fn test_delivery_charged_per_line() {
        let p1 = catalog().require(&ProductId::new("p1")).unwrap().clone();
        let p2 = Product {
            id: ProductId::new("p2"),
            price_cents: 300,
            ..p1.clone()
        };
        let two_products = ProductCatalog::new(vec![p1, p2]);
        let cart = Cart::from_items(vec![
            CartItem::new("p1", 1, "d1"),
            CartItem::new("p2", 1, "d1"),
        ]);

        let summary = PaymentSummary::compute(&cart, &two_products, &options());
        assert_eq!(summary.shipping_total, Money::new(1000));
    }

    #[test]
    fn test_unknown_product_excluded() {
        let cart = Cart::from_items(vec![
            CartItem::new("p1", 2, "d1"),
            CartItem::new("ghost", 7, "d1"),
        ]);
        let summary = PaymentSummary::compute(&cart, &catalog(), &options());

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, Money::new(2750));
    }

    #[test]
    fn test_huge_quantity_saturates_totals() {
        let cart = Cart::from_items(vec![CartItem::new("p1", 10_000_000_000_000_000, "d1")]);
        let summary = PaymentSummary::compute(&cart, &catalog(), &options());

        assert_eq!(summary.item_count, 10_000_000_000_000_000);
        assert_eq!(summary.products_total, Money::new(i64::MAX));
        assert_eq!(summary.total_before_tax, Money::new(i64::MAX));
        assert_eq!(summary.total, Money::new(i64::MAX));
        assert!(summary.tax.amount_cents > 0);
    }

    #[test]
    fn test_empty_cart() {
        let summary = PaymentSummary::compute(&Cart::new(), &catalog(), &options());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
    }
}
