//! Catalog, cart and checkout logic for the Shopfront storefront.
//!
//! This crate holds everything that can be computed without a page or a
//! network:
//!
//! - **Catalog**: products (with category variants) and delivery options
//! - **Cart**: line items, the owned [`CartStore`] and its storage port
//! - **Checkout**: line resolution, the payment summary, orders and history
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = ProductCatalog::bundled()?;
//! let options = DeliveryOptions::standard();
//!
//! let mut store = CartStore::load(KvCartStorage::new(MemoryStore::new()));
//! store.add(&ProductId::new("54e0eccd-8f36-462b-b68a-8182611d9add"), 1);
//!
//! let summary = PaymentSummary::compute(store.cart(), &catalog, &options);
//! println!("Order total: {}", summary.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_price, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_price, Money};

    // Catalog
    pub use crate::catalog::{
        format_delivery_date, DeliveryOption, DeliveryOptions, Product, ProductCatalog,
        ProductKind, Rating,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartStorage, CartStore, DEFAULT_DELIVERY_OPTION};

    #[cfg(feature = "storage")]
    pub use crate::cart::KvCartStorage;

    // Checkout
    pub use crate::checkout::{resolve_lines, Order, PaymentSummary, ResolvedLine, TAX_RATE_PERCENT};

    #[cfg(feature = "storage")]
    pub use crate::checkout::OrderHistory;
}
