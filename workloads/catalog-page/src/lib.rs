//! Catalog page.
//!
//! Lists every product with a quantity selector and an add-to-cart button,
//! and keeps the header cart badge in sync with the cart store.

mod page;
mod sections;
mod view;

pub use page::*;
pub use sections::*;
pub use view::*;
