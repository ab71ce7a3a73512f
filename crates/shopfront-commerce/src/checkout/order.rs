//! Order types and the local order history.

use crate::cart::Cart;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage key of the order history.
pub const ORDERS_STORAGE_KEY: &str = "orders";

/// Navigation target after an order is placed.
pub const ORDER_CONFIRMATION_PAGE: &str = "orders.html";

/// An order created by the backend from a submitted cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identifier.
    pub id: OrderId,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Snapshot of the submitted cart.
    pub cart: Cart,
}

impl Order {
    /// Creation time as a UTC datetime, if the timestamp is in range.
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }
}

/// Orders placed from this storefront, oldest first.
#[cfg(feature = "storage")]
#[derive(Debug)]
pub struct OrderHistory<K: shopfront_cache::KvStore> {
    cache: shopfront_cache::Cache<K>,
}

#[cfg(feature = "storage")]
impl<K: shopfront_cache::KvStore> OrderHistory<K> {
    pub fn new(store: K) -> Self {
        Self {
            cache: shopfront_cache::Cache::new(store),
        }
    }

    /// All stored orders. An unreadable history reads as empty.
    pub fn orders(&self) -> Vec<Order> {
        match self.cache.get(ORDERS_STORAGE_KEY) {
            Ok(orders) => orders.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "stored order history unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append an order and persist the history.
    pub fn add(&self, order: Order) -> Result<(), crate::CommerceError> {
        let mut orders = self.orders();
        orders.push(order);
        self.cache.set(ORDERS_STORAGE_KEY, &orders)?;
        Ok(())
    }

    /// Find an order by id.
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| &o.id == id)
    }

    pub fn store(&self) -> &K {
        self.cache.store()
    }
}
