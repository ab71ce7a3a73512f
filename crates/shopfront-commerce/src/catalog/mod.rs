//! Product catalog module.
//!
//! Contains read-only reference data: products and delivery options.

mod delivery;
mod product;

pub use delivery::{format_delivery_date, DeliveryOption, DeliveryOptions};
pub use product::{Product, ProductCatalog, ProductKind, Rating};
