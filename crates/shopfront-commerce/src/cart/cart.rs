//! Cart and line item types.

use crate::ids::{DeliveryOptionId, ProductId};
use serde::{Deserialize, Serialize};

/// Delivery option assigned to newly added items.
pub const DEFAULT_DELIVERY_OPTION: &str = "1";

/// A line in the cart. At most one per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity. Not validated; callers are trusted.
    pub quantity: i64,
    /// Chosen delivery option.
    pub delivery_option_id: DeliveryOptionId,
}

impl CartItem {
    /// Create a new cart item.
    pub fn new(
        product_id: impl Into<ProductId>,
        quantity: i64,
        delivery_option_id: impl Into<DeliveryOptionId>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            delivery_option_id: delivery_option_id.into(),
        }
    }
}

/// A shopping cart: line items in insertion order.
///
/// Serializes as a bare JSON array of items, which is the storage format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from existing items.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The cart a first-time visitor starts with.
    pub fn seeded() -> Self {
        Self::from_items(vec![
            CartItem::new("e43638ce-6aa0-4b85-b27f-e1d07eb678c6", 2, "1"),
            CartItem::new("15b6fc6f-327a-4ec4-896f-486349e85a3d", 1, "2"),
        ])
    }

    /// Add a quantity of a product.
    ///
    /// An existing line has its quantity incremented; otherwise a new line is
    /// appended with the default delivery option.
    pub fn add_item(&mut self, product_id: &ProductId, quantity: i64) {
        if let Some(existing) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem::new(
            product_id.clone(),
            quantity,
            DEFAULT_DELIVERY_OPTION,
        ));
    }

    /// Remove every line for a product. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Change the delivery option of a product's line.
    ///
    /// Returns `false` (and changes nothing) when the product is not in the cart.
    pub fn set_delivery_option(
        &mut self,
        product_id: &ProductId,
        delivery_option_id: &DeliveryOptionId,
    ) -> bool {
        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.delivery_option_id = delivery_option_id.clone();
                true
            }
            None => false,
        }
    }

    /// Get total item count (sum of quantities), saturating at the `i64` bounds.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&ProductId::new("p1"), 2);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.get_item(&ProductId::new("p1")).unwrap().delivery_option_id.as_str(),
            DEFAULT_DELIVERY_OPTION
        );
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let p1 = ProductId::new("p1");
        cart.add_item(&p1, 2);
        cart.add_item(&p1, 3);

        assert_eq!(cart.items(), &[CartItem::new("p1", 5, "1")]);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        let p1 = ProductId::new("p1");
        cart.add_item(&p1, i64::MAX);
        cart.add_item(&p1, 1);
        cart.add_item(&ProductId::new("p2"), 5);

        assert_eq!(cart.get_item(&p1).unwrap().quantity, i64::MAX);
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&ProductId::new("b"), 1);
        cart.add_item(&ProductId::new("a"), 1);
        cart.add_item(&ProductId::new("b"), 1);

        let ids: Vec<&str> = cart.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::seeded();
        let before = cart.clone();

        assert!(!cart.remove_item(&ProductId::new("missing")));
        assert_eq!(cart, before);

        assert!(cart.remove_item(&ProductId::new("e43638ce-6aa0-4b85-b27f-e1d07eb678c6")));
        assert!(!cart.remove_item(&ProductId::new("e43638ce-6aa0-4b85-b27f-e1d07eb678c6")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_set_delivery_option_missing_is_noop() {
        let mut cart = Cart::seeded();
        let before = cart.clone();

        assert!(!cart.set_delivery_option(&ProductId::new("missing"), &DeliveryOptionId::new("3")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = Cart::from_items(vec![CartItem::new("p1", 2, "d1")]);
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"[{"productId":"p1","quantity":2,"deliveryOptionId":"d1"}]"#);

        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
