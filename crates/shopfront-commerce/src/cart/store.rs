//! The owned cart store and its persistence port.

use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;
use crate::ids::{DeliveryOptionId, ProductId};

/// Storage key of the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Persistence port for the cart.
pub trait CartStorage {
    /// Read the stored cart. `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<Cart>, CommerceError>;

    /// Replace the stored cart.
    fn save(&self, cart: &Cart) -> Result<(), CommerceError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Result<Option<Cart>, CommerceError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        (**self).save(cart)
    }
}

/// Cart state owned by the page, written through to storage on every change.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart from storage.
    ///
    /// A missing or unreadable cart falls back to [`Cart::seeded`]; nothing is
    /// written until the first mutation.
    pub fn load(storage: S) -> Self {
        let cart = read_or_seed(&storage);
        Self { cart, storage }
    }

    /// Re-read the cart from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.cart = read_or_seed(&self.storage);
    }

    /// Add a quantity of a product and persist.
    pub fn add(&mut self, product_id: &ProductId, quantity: i64) {
        self.cart.add_item(product_id, quantity);
        self.persist();
    }

    /// Remove a product and persist. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        self.persist();
        removed
    }

    /// Change a line's delivery option. Persists only when the line exists.
    pub fn set_delivery_option(
        &mut self,
        product_id: &ProductId,
        delivery_option_id: &DeliveryOptionId,
    ) -> bool {
        let updated = self.cart.set_delivery_option(product_id, delivery_option_id);
        if updated {
            self.persist();
        }
        updated
    }

    /// Replace the cart with the seeded default and persist.
    pub fn reset(&mut self) {
        self.cart = Cart::seeded();
        self.persist();
    }

    /// Total quantity across lines, for the cart badge.
    pub fn quantity(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Owned copy of the current cart, e.g. for order submission.
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.cart) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

fn read_or_seed<S: CartStorage>(storage: &S) -> Cart {
    match storage.load() {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::seeded(),
        Err(e) => {
            tracing::debug!(error = %e, "stored cart unreadable, using default cart");
            Cart::seeded()
        }
    }
}

/// [`CartStorage`] over a key-value store, under the `cart` key.
#[cfg(feature = "storage")]
#[derive(Debug)]
pub struct KvCartStorage<K: shopfront_cache::KvStore> {
    cache: shopfront_cache::Cache<K>,
    key: String,
}

#[cfg(feature = "storage")]
impl<K: shopfront_cache::KvStore> KvCartStorage<K> {
    pub fn new(store: K) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Use a non-default storage key.
    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            cache: shopfront_cache::Cache::new(store),
            key: key.into(),
        }
    }

    pub fn store(&self) -> &K {
        self.cache.store()
    }
}

#[cfg(feature = "storage")]
impl<K: shopfront_cache::KvStore> CartStorage for KvCartStorage<K> {
    fn load(&self) -> Result<Option<Cart>, CommerceError> {
        Ok(self.cache.get(&self.key)?)
    }

    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        Ok(self.cache.set(&self.key, cart)?)
    }
}
