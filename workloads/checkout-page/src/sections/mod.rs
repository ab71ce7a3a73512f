//! Section renderers for the checkout page.

mod order_summary;
mod payment_summary;

pub use order_summary::*;
pub use payment_summary::*;
