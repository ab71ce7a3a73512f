//! Checkout module.
//!
//! Line resolution, the payment summary, and orders.

mod order;
mod pricing;
mod resolve;

pub use order::{Order, ORDERS_STORAGE_KEY, ORDER_CONFIRMATION_PAGE};
pub use pricing::{PaymentSummary, TAX_RATE_PERCENT};
pub use resolve::{resolve_lines, ResolvedLine};

#[cfg(feature = "storage")]
pub use order::OrderHistory;
