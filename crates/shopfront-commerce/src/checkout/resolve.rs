//! Joining cart lines with their reference data.

use crate::cart::{Cart, CartItem};
use crate::catalog::{DeliveryOption, DeliveryOptions, Product, ProductCatalog};
use crate::money::Money;

/// A cart line whose product and delivery option are both known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLine<'a> {
    pub item: &'a CartItem,
    pub product: &'a Product,
    pub delivery_option: &'a DeliveryOption,
}

impl ResolvedLine<'_> {
    /// Product price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price() * self.item.quantity
    }
}

/// Resolve every cart line against the catalogs, in cart order.
///
/// Lines whose product or delivery option is unknown are skipped and logged;
/// the remaining lines are still returned.
pub fn resolve_lines<'a>(
    cart: &'a Cart,
    catalog: &'a ProductCatalog,
    delivery_options: &'a DeliveryOptions,
) -> Vec<ResolvedLine<'a>> {
    cart.iter()
        .filter_map(|item| {
            let Some(product) = catalog.get(&item.product_id) else {
                tracing::warn!(product_id = %item.product_id, "product not found, skipping cart line");
                return None;
            };
            let Some(delivery_option) = delivery_options.get(&item.delivery_option_id) else {
                tracing::warn!(
                    product_id = %item.product_id,
                    delivery_option_id = %item.delivery_option_id,
                    "delivery option not found, skipping cart line"
                );
                return None;
            };
            Some(ResolvedLine {
                item,
                product,
                delivery_option,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductKind, Rating};
    use crate::ids::ProductId;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            image: format!("images/{}.jpg", id),
            name: id.to_uppercase(),
            rating: Rating {
                stars: 4.0,
                count: 10,
            },
            price_cents,
            keywords: Vec::new(),
            kind: ProductKind::Standard,
        }
    }

    #[test]
    fn test_skips_unknown_product_and_option() {
        let catalog = ProductCatalog::new(vec![product("p1", 1000), product("p2", 500)]);
        let options = DeliveryOptions::standard();
        let cart = Cart::from_items(vec![
            CartItem::new("p1", 2, "1"),
            CartItem::new("ghost", 1, "1"),
            CartItem::new("p2", 1, "99"),
        ]);

        let lines = resolve_lines(&cart, &catalog, &options);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.id.as_str(), "p1");
        assert_eq!(lines[0].subtotal().amount_cents, 2000);
    }
}
