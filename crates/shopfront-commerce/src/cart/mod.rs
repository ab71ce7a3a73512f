//! Shopping cart module.
//!
//! Contains the cart value type and the store that owns and persists it.

mod cart;
mod store;

pub use cart::{Cart, CartItem, DEFAULT_DELIVERY_OPTION};
pub use store::{CartStorage, CartStore, CART_STORAGE_KEY};

#[cfg(feature = "storage")]
pub use store::KvCartStorage;
