//! Section renderers for the catalog page.

mod products_grid;

pub use products_grid::*;
