//! Checkout page.
//!
//! Renders the cart review and payment summary into a [`PageSurface`] and
//! handles the page's interactions:
//! - Deleting a line without re-rendering the other lines
//! - Switching a line's delivery option
//! - Placing the order and recording it in the local history
//!
//! [`PageSurface`]: shopfront_dom::PageSurface

mod error;
mod page;
mod sections;
mod view;

pub use error::PageError;
pub use page::*;
pub use sections::*;
pub use view::*;
